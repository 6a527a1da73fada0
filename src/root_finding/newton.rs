//! Newton-Raphson (tangent) method

use log::{debug, trace};

use super::algorithms::Algorithm;
use super::config::{SolverCfg, DERIVATIVE_FLOOR};
use super::errors::SolverError;
use super::report::{NewtonStep, SolveResult, Termination, ToleranceReason};

const ALGORITHM: Algorithm = Algorithm::Newton;


/// Helpers 
/// - `eval_fx_checked`  : evaluates `f(x)` with finite-check
/// - `eval_dfx_checked` : evaluates `f'(x)` and rejects slopes below [`DERIVATIVE_FLOOR`]
#[inline] 
fn eval_fx_checked(
    cfg: &SolverCfg, 
    x: f64, 
    evals: &mut usize
) -> Result<f64, SolverError> { 
    let fx = { *evals += 1; cfg.eval(x) }; 
    if !fx.is_finite() { 
        return Err(SolverError::NonFiniteEvaluation { x, fx });
    }

    Ok(fx)
}
#[inline] 
fn eval_dfx_checked(
    cfg: &SolverCfg, 
    x: f64, 
    evals: &mut usize
) -> Result<f64, SolverError> { 
    let (dfx, calls) = cfg.eval_derivative(x); 
    *evals += calls; 

    // NaN fails this comparison too 
    if !(dfx.abs() >= DERIVATIVE_FLOOR) { 
        return Err(SolverError::UnstableDerivative { x, dfx });
    }

    Ok(dfx)
}


/// Finds a root of `cfg.function()` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
/// Uses the analytic derivative if one was configured, otherwise the central 
/// finite-difference resolved when `cfg` was built.
///
/// # Arguments
/// - `cfg` : [`SolverCfg`] (function, derivative, tolerance, max_iter)
/// - `x0`  : initial guess
///
/// # Behavior
/// - Each step evaluates `f(x)` and `f'(x)`, then 
///   `x_next = x - f(x) / f'(x)` and `error = |x_next - x|`.
/// - Stops when `|f(x)| < tolerance` or `error < tolerance`. The update is 
///   applied before stopping, so `root` is always the latest `x_next`.
///
/// # Returns
/// [`SolveResult`] with one [`NewtonStep`] per iteration.
///
/// # Errors
/// - [`SolverError::Config`]              : invalid `cfg`
/// - [`SolverError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`SolverError::UnstableDerivative`]  : `|f'(x)| < 1e-12` or non-finite
///
/// # Notes
/// - Convergence is *local only* and depends on a good initial guess `x0`.
///   Poor guesses can diverge or cycle until `max_iter` runs out.
pub fn newton(
    cfg: &SolverCfg, 
    x0: f64, 
) -> Result<SolveResult<NewtonStep>, SolverError> { 
    cfg.validate()?; 

    let tol      = cfg.tolerance(); 
    let max_iter = cfg.max_iter(); 

    let mut evals  = 0; 
    let mut trace  = Vec::new(); 
    let mut x      = x0; 
    let mut x_next = x0; // overwritten on the first step 

    for step in 1..=max_iter { 
        let fx  = eval_fx_checked(cfg, x, &mut evals)?; 
        let dfx = eval_dfx_checked(cfg, x, &mut evals)?; 

        x_next    = x - fx / dfx; 
        let error = (x_next - x).abs(); 

        trace.push(NewtonStep { step, x, fx, dfx, x_next, error }); 
        trace!("newton step {step}: x={x} f(x)={fx:e} f'(x)={dfx:e} x_next={x_next} err={error:e}");

        let reason = if fx.abs() < tol { 
            Some(ToleranceReason::AbsFxReached) 
        } else if error < tol { 
            Some(ToleranceReason::StepSizeReached) 
        } else { 
            None 
        };
        if let Some(tolerance) = reason { 
            debug!("newton converged to {x_next} after {step} steps ({tolerance:?})");
            return Ok(SolveResult { 
                root        : x_next, 
                trace, 
                evaluations : evals, 
                termination : Termination::ToleranceReached, 
                tolerance, 
                algorithm   : ALGORITHM, 
            });
        }

        x = x_next; 
    }

    debug!("newton hit max_iter={max_iter} from x0={x0}; returning last iterate {x_next}");
    Ok(SolveResult { 
        root        : x_next, 
        trace, 
        evaluations : evals, 
        termination : Termination::IterationLimit, 
        tolerance   : ToleranceReason::ToleranceNotReached, 
        algorithm   : ALGORITHM, 
    })
}
