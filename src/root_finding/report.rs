//! Defines the [`SolveResult`] struct returned by all root-finding 
//! algorithms, and the per-step records that make up its trace.

use super::algorithms::Algorithm;


/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)] 
pub enum Termination { 
    ToleranceReached, 
    IterationLimit,
}


/// Which tolerance condition was satisfied (or not).
/// ├ [`ToleranceReason::AbsFxReached`]    
/// │   ├ All methods 
/// │   └ |f(x)| < tol
/// │
/// ├ [`ToleranceReason::WidthTolReached`]
/// │   ├ Bisection 
/// │   └ |high - low| / 2 < tol 
/// │
/// ├ [`ToleranceReason::StepSizeReached`]
/// │   ├ Newton, secant 
/// │   └ |x_next - x| < tol 
/// │
/// └ [`ToleranceReason::ToleranceNotReached`] 
///     ├ All methods 
///     └ Always alongside [`Termination::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceReason { 
    AbsFxReached, 
    WidthTolReached, 
    StepSizeReached, 
    ToleranceNotReached
}


/// Common view over the per-step records of every algorithm. 
pub trait IterationRecord { 
    /// 1-based step index. 
    fn step(&self) -> usize; 

    /// Root estimate produced by this step. 
    fn estimate(&self) -> f64; 

    /// Function value examined by this step's stopping test. 
    fn residual(&self) -> f64; 

    /// Algorithm-specific error measure (half-width or step size). 
    fn error(&self) -> f64; 
}


/// One bisection step. 
/// 
/// `low`/`high` are the bracket *before* the update; `error` is the half-width 
/// `|high - low| / 2`, not `|f_mid|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionStep { 
    pub step     : usize, 
    pub low      : f64, 
    pub f_low    : f64, 
    pub high     : f64, 
    pub f_high   : f64, 
    pub midpoint : f64, 
    pub f_mid    : f64, 
    pub error    : f64, 
}

/// One Newton step. `error` is `|x_next - x|`. 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonStep { 
    pub step   : usize, 
    pub x      : f64, 
    pub fx     : f64, 
    pub dfx    : f64, 
    pub x_next : f64, 
    pub error  : f64, 
}

/// One secant step. `error` is `|x_next - x_curr|`. 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantStep { 
    pub step   : usize, 
    pub x_prev : f64, 
    pub x_curr : f64, 
    pub x_next : f64, 
    pub f_curr : f64, 
    pub error  : f64, 
}

impl IterationRecord for BisectionStep { 
    fn step(&self)     -> usize { self.step }
    fn estimate(&self) -> f64 { self.midpoint }
    fn residual(&self) -> f64 { self.f_mid }
    fn error(&self)    -> f64 { self.error }
}

impl IterationRecord for NewtonStep { 
    fn step(&self)     -> usize { self.step }
    fn estimate(&self) -> f64 { self.x_next }
    fn residual(&self) -> f64 { self.fx }
    fn error(&self)    -> f64 { self.error }
}

impl IterationRecord for SecantStep { 
    fn step(&self)     -> usize { self.step }
    fn estimate(&self) -> f64 { self.x_next }
    fn residual(&self) -> f64 { self.f_curr }
    fn error(&self)    -> f64 { self.error }
}


/// Final result returned by all root-finding algorithms.  
/// 
/// [`SolveResult`]
/// ├ `root`        : root approximation (last midpoint / last `x_next`)  
/// ├ `trace`       : one record per step, in order, never empty  
/// ├ `evaluations` : total calls of `f` (and of an analytic `f'`)  
/// ├ `termination` : why the solver stopped ([`Termination`])  
/// ├ `tolerance`   : which tolerance was met ([`ToleranceReason`])  
/// └ `algorithm`   : which method produced it  
///
/// # Warning 
/// └ Hitting the iteration cap is not an error. Check 
///   [`SolveResult::converged`] (or compare `trace.len()` with `max_iter`) 
///   before trusting `root`.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult<S> { 
    pub root        : f64, 
    pub trace       : Vec<S>, 
    pub evaluations : usize, 
    pub termination : Termination, 
    pub tolerance   : ToleranceReason, 
    pub algorithm   : Algorithm, 
}

impl<S: IterationRecord> SolveResult<S> { 
    /// Number of steps performed. 
    pub fn iterations(&self) -> usize { 
        self.trace.len()
    }

    /// Error measure of the final step. 
    pub fn final_error(&self) -> Option<f64> { 
        self.trace.last().map(IterationRecord::error)
    }

    /// Function value examined by the final step. 
    pub fn final_residual(&self) -> Option<f64> { 
        self.trace.last().map(IterationRecord::residual)
    }

    /// `true` unless the iteration cap was exhausted. 
    pub fn converged(&self) -> bool { 
        self.termination == Termination::ToleranceReached
    }

    /// Error measures of every step, in order. 
    pub fn errors(&self) -> Vec<f64> { 
        self.trace.iter().map(IterationRecord::error).collect()
    }
}
