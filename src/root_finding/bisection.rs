//! Bisection (binary search on a sign change).

use log::{debug, trace};

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::SolverError;
use super::report::{BisectionStep, SolveResult, Termination, ToleranceReason};
use super::signs::opposite_sign;

const ALGORITHM: Algorithm = Algorithm::Bisection;


/// Finds a root of `cfg.function()` using the 
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
///
/// ┌ `cfg`  - [`SolverCfg`] with the function, `tolerance` and `max_iter`.
/// ├ `low`  - one end of the bracket.
/// └ `high` - other end of the bracket.
///
/// # Algorithm
///
/// Each step computes `m = (low + high) / 2`, `f(m)` and the half-width 
/// `error = |high - low| / 2`, records them, then stops if 
/// `|f(m)| < tolerance` **or** `error < tolerance`. Otherwise the endpoint 
/// sharing the sign of `f(m)` is replaced by `m`; the cached value of the 
/// surviving endpoint is reused, so each step costs one evaluation.
///
/// # Returns
///
/// [`SolveResult`] whose `root` is the last midpoint computed. 
/// ├ [`ToleranceReason::AbsFxReached`]        - `|f(m)| < tolerance`
/// ├ [`ToleranceReason::WidthTolReached`]     - half-width `< tolerance`
/// └ [`ToleranceReason::ToleranceNotReached`] - `max_iter` exhausted ([`Termination::IterationLimit`])
///
/// # Errors
///
/// ┌ [`SolverError::Config`]              - invalid `cfg`.
/// ├ [`SolverError::NonFiniteEvaluation`] - `f(x)` produced NaN/inf.
/// └ [`SolverError::InvalidBracket`]      - `f(low) * f(high) >= 0`, raised before any step.
pub fn bisection(
    cfg: &SolverCfg, 
    low: f64, 
    high: f64, 
) -> Result<SolveResult<BisectionStep>, SolverError> { 
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

    let mut f_low  = eval(low)?; 
    let mut f_high = eval(high)?; 
    if !opposite_sign(f_low, f_high) { 
        return Err(SolverError::InvalidBracket { low, high, f_low, f_high });
    }

    let (mut a, mut b) = (low, high); 
    let mut trace = Vec::new(); 
    let mut midpoint = a; // overwritten on the first step 

    for step in 1..=max_iter { 
        midpoint  = (a + b) / 2.0; 
        let f_mid = eval(midpoint)?; 
        let error = (b - a).abs() / 2.0; 

        trace.push(BisectionStep { 
            step, 
            low    : a, 
            f_low, 
            high   : b, 
            f_high, 
            midpoint, 
            f_mid, 
            error, 
        }); 
        trace!("bisection step {step}: [{a}, {b}] m={midpoint} f(m)={f_mid:e} err={error:e}");

        let reason = if f_mid.abs() < tol { 
            Some(ToleranceReason::AbsFxReached) 
        } else if error < tol { 
            Some(ToleranceReason::WidthTolReached) 
        } else { 
            None 
        };
        if let Some(tolerance) = reason { 
            debug!("bisection converged to {midpoint} after {step} steps ({tolerance:?})");
            return Ok(SolveResult { 
                root        : midpoint, 
                trace, 
                evaluations : evals, 
                termination : Termination::ToleranceReached, 
                tolerance, 
                algorithm   : ALGORITHM, 
            });
        }

        // keep the half that still brackets the root
        if opposite_sign(f_low, f_mid) { 
            b      = midpoint; 
            f_high = f_mid; 
        } else { 
            a     = midpoint; 
            f_low = f_mid; 
        }
    }

    debug!("bisection hit max_iter={max_iter} on [{low}, {high}]; returning last midpoint {midpoint}");
    Ok(SolveResult { 
        root        : midpoint, 
        trace, 
        evaluations : evals, 
        termination : Termination::IterationLimit, 
        tolerance   : ToleranceReason::ToleranceNotReached, 
        algorithm   : ALGORITHM, 
    })
}
