//! Shared configuration for root-finding algorithms.  
//! 
//! [`SolverCfg`] is built once and read by all three solvers.  
//!
//! [`SolverCfg`] — fields  
//! ├ `function`   : the scalar function `f(x)` whose root is sought  
//! ├ `derivative` : [`Derivative`], analytic or central finite-difference  
//! ├ `tolerance`  : shared stopping tolerance (residual and step/width)  
//! └ `max_iter`   : iteration cap  
//!
//! The derivative is resolved at construction. [`SolverCfg::new`] starts with a 
//! central finite-difference of step [`DEFAULT_FD_STEP`]; 
//! [`SolverCfg::with_derivative`] swaps in an analytic one. Nothing is assigned 
//! lazily, so a built config can be cloned and shared across threads as-is.


use std::fmt;
use std::sync::Arc;

use super::errors::ConfigError;


pub const DEFAULT_TOLERANCE : f64   = 1e-6;
pub const DEFAULT_MAX_ITER  : usize = 100;
pub const DEFAULT_FD_STEP   : f64   = 1e-7;

/// Newton fails if `|f'(x)|` falls below this.
pub const DERIVATIVE_FLOOR  : f64   = 1e-12;

/// Secant fails if `|f(x_k) - f(x_{k-1})|` falls below this.
pub const SECANT_FLOOR      : f64   = 1e-12;


/// Shared, thread-safe scalar function `ℝ → ℝ`.
pub type ScalarFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;


/// Derivative source for Newton's method. 
/// - [`Derivative::Analytic`]          : caller-supplied `f'(x)` 
/// - [`Derivative::CentralDifference`] : `(f(x + h) - f(x - h)) / (2h)` 
#[derive(Clone)]
pub enum Derivative { 
    Analytic(ScalarFn), 
    CentralDifference { step: f64 },
}

impl fmt::Debug for Derivative { 
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { 
        match self { 
            Derivative::Analytic(_)                => f.write_str("Analytic"), 
            Derivative::CentralDifference { step } => { 
                f.debug_struct("CentralDifference").field("step", step).finish()
            }
        }
    }
}


/// Root-finding configuration. 
/// 
/// # Construction 
/// ┌ [`SolverCfg::new`] / [`SolverCfg::from_shared`] with the function  
/// └ optional `with_*` setters (consume and return `self`)  
///
/// # Defaults 
/// ├ `tolerance`  = [`DEFAULT_TOLERANCE`]  
/// ├ `max_iter`   = [`DEFAULT_MAX_ITER`]  
/// └ `derivative` = central finite-difference, step [`DEFAULT_FD_STEP`]  
///
/// # Validation 
/// └ Every solver calls [`SolverCfg::validate`] before evaluating anything:  
///    ├ `tolerance` > 0 and finite  
///    ├ `max_iter`  >= 1  
///    └ finite-difference `step` > 0 and finite  
#[derive(Clone)]
pub struct SolverCfg { 
    function   : ScalarFn, 
    derivative : Derivative, 
    tolerance  : f64, 
    max_iter   : usize, 
}

impl SolverCfg { 
    #[must_use]
    pub fn new<F>(function: F) -> Self 
    where F: Fn(f64) -> f64 + Send + Sync + 'static { 
        Self::from_shared(Arc::new(function))
    }

    #[must_use]
    pub fn from_shared(function: ScalarFn) -> Self { 
        Self { 
            function, 
            derivative : Derivative::CentralDifference { step: DEFAULT_FD_STEP }, 
            tolerance  : DEFAULT_TOLERANCE, 
            max_iter   : DEFAULT_MAX_ITER, 
        }
    }

    pub fn with_derivative<G>(self, derivative: G) -> Self 
    where G: Fn(f64) -> f64 + Send + Sync + 'static { 
        self.with_shared_derivative(Arc::new(derivative))
    }

    pub fn with_shared_derivative(mut self, derivative: ScalarFn) -> Self { 
        self.derivative = Derivative::Analytic(derivative); 
        self 
    }

    /// Replaces the derivative with a central finite-difference of the given step. 
    pub fn with_fd_step(mut self, step: f64) -> Self { 
        self.derivative = Derivative::CentralDifference { step }; 
        self 
    }

    pub fn with_tolerance(mut self, v: f64)   -> Self { self.tolerance = v; self }
    pub fn with_max_iter (mut self, v: usize) -> Self { self.max_iter  = v; self }

    #[inline] #[must_use] pub fn tolerance(&self)  -> f64 { self.tolerance }
    #[inline] #[must_use] pub fn max_iter(&self)   -> usize { self.max_iter }
    #[inline] #[must_use] pub fn function(&self)   -> &ScalarFn { &self.function }
    #[inline] #[must_use] pub fn derivative(&self) -> &Derivative { &self.derivative }

    pub fn validate(&self) -> Result<(), ConfigError> { 
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) { 
            return Err(ConfigError::InvalidTolerance { got: self.tolerance });
        }
        if self.max_iter == 0 { 
            return Err(ConfigError::InvalidMaxIter { got: self.max_iter });
        }
        if let Derivative::CentralDifference { step } = self.derivative { 
            if !(step.is_finite() && step > 0.0) { 
                return Err(ConfigError::InvalidStep { got: step });
            }
        }
        Ok(())
    }

    /// Evaluates `f(x)`. 
    #[inline] 
    pub fn eval(&self, x: f64) -> f64 { 
        (self.function)(x)
    }

    /// Evaluates `f'(x)` from the configured [`Derivative`]. 
    ///
    /// Returns the derivative value and the number of function calls it took 
    /// (one for analytic, two for the central difference).
    #[inline] 
    pub fn eval_derivative(&self, x: f64) -> (f64, usize) { 
        match &self.derivative { 
            Derivative::Analytic(df)               => (df(x), 1), 
            Derivative::CentralDifference { step } => { 
                let h = *step; 
                ((self.eval(x + h) - self.eval(x - h)) / (2.0 * h), 2)
            }
        }
    }
}

impl fmt::Debug for SolverCfg { 
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { 
        f.debug_struct("SolverCfg")
            .field("derivative", &self.derivative)
            .field("tolerance", &self.tolerance)
            .field("max_iter", &self.max_iter)
            .finish_non_exhaustive()
    }
}
