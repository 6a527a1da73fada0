//! Secant (chord) method

use log::{debug, trace};

use super::algorithms::Algorithm;
use super::config::{SolverCfg, SECANT_FLOOR};
use super::errors::SolverError;
use super::report::{SecantStep, SolveResult, Termination, ToleranceReason};

const ALGORITHM: Algorithm = Algorithm::Secant;


/// Calculates the secant x-intercept through `(x_prev, f_prev)` and `(x_curr, f_curr)`. 
///
/// # Returns 
/// - `Ok(x_next)` if `|f_curr - f_prev| >= SECANT_FLOOR` 
/// - `Err(SolverError::DegenerateSecant)` otherwise (including NaN)
#[inline]
fn secant_step(
    (x_prev, f_prev): (f64, f64), 
    (x_curr, f_curr): (f64, f64), 
) -> Result<f64, SolverError> { 
    let denom = f_curr - f_prev; 
    if !(denom.abs() >= SECANT_FLOOR) { 
        return Err(SolverError::DegenerateSecant { x_prev, x_curr, f_prev, f_curr });
    }

    Ok(x_curr - f_curr * (x_curr - x_prev) / denom)
}


/// Finds a root of `cfg.function()` using the 
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `cfg` : [`SolverCfg`] (function, tolerance, max_iter)
/// - `x0`  : first seed, becomes `x_prev`
/// - `x1`  : second seed, becomes `x_curr`
///
/// # Behavior
/// - Update:
///     x_next = x_curr - f(x_curr) * (x_curr - x_prev) / (f(x_curr) - f(x_prev))
/// - Error is the step size `|x_next - x_curr|`.
/// - Stops when `|f(x_curr)| < tolerance` or `error < tolerance`; `root` is the 
///   final `x_next`.
/// - Between steps `(x_prev, x_curr) <- (x_curr, x_next)`. `f(x_prev)` is carried 
///   over from the previous step instead of being re-evaluated.
///
/// # Errors
/// - [`SolverError::Config`]              : invalid `cfg`
/// - [`SolverError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`SolverError::DegenerateSecant`]    : `|f(x_curr) - f(x_prev)| < 1e-12`
///
/// # Warning 
/// - Poor initial guesses may lead to divergence. For guaranteed convergence, 
///   use [`bisection`](super::bisection::bisection).
pub fn secant(
    cfg: &SolverCfg, 
    x0: f64, 
    x1: f64, 
) -> Result<SolveResult<SecantStep>, SolverError> { 
    cfg.validate()?; 

    let tol      = cfg.tolerance(); 
    let max_iter = cfg.max_iter(); 

    let mut evals = 0; 
    let mut eval = |x: f64| -> Result<f64, SolverError> { 
        let fx = { evals += 1; cfg.eval(x) }; 
        if !fx.is_finite() { 
            return Err(SolverError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    };

    let mut x_prev = x0; 
    let mut x_curr = x1; 
    let mut f_prev = eval(x_prev)?; 
    let mut x_next = x1; // overwritten on the first step 
    let mut trace  = Vec::new(); 

    for step in 1..=max_iter { 
        let f_curr = eval(x_curr)?; 

        x_next    = secant_step((x_prev, f_prev), (x_curr, f_curr))?; 
        let error = (x_next - x_curr).abs(); 

        trace.push(SecantStep { step, x_prev, x_curr, x_next, f_curr, error }); 
        trace!("secant step {step}: x_prev={x_prev} x_curr={x_curr} f={f_curr:e} x_next={x_next} err={error:e}");

        let reason = if f_curr.abs() < tol { 
            Some(ToleranceReason::AbsFxReached) 
        } else if error < tol { 
            Some(ToleranceReason::StepSizeReached) 
        } else { 
            None 
        };
        if let Some(tolerance) = reason { 
            debug!("secant converged to {x_next} after {step} steps ({tolerance:?})");
            return Ok(SolveResult { 
                root        : x_next, 
                trace, 
                evaluations : evals, 
                termination : Termination::ToleranceReached, 
                tolerance, 
                algorithm   : ALGORITHM, 
            });
        }

        x_prev = x_curr; 
        f_prev = f_curr; 
        x_curr = x_next; 
    }

    debug!("secant hit max_iter={max_iter} from ({x0}, {x1}); returning last iterate {x_next}");
    Ok(SolveResult { 
        root        : x_next, 
        trace, 
        evaluations : evals, 
        termination : Termination::IterationLimit, 
        tolerance   : ToleranceReason::ToleranceNotReached, 
        algorithm   : ALGORITHM, 
    })
}
