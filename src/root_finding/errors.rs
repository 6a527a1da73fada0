//! Root-finding error types.  
//! 
//! ┌ [`ConfigError`] : invalid solver configuration  
//! │   ├ tolerance non-finite or <= 0  
//! │   ├ max_iter == 0  
//! │   └ finite-difference step non-finite or <= 0  
//! │
//! ├ [`DomainError`] : invalid intervals and sampling requests  
//! │   ├ non-finite bounds or low >= high  
//! │   └ fewer than two samples  
//! │
//! └ [`SolverError`] : per-call solver failures  
//!     ├ invalid configuration (propagated from [`ConfigError`])  
//!     ├ no sign change on the bisection bracket  
//!     ├ near-zero derivative in Newton  
//!     ├ near-equal function values in secant  
//!     └ non-finite function evaluation  
//!
//! Exhausting `max_iter` is *not* an error. It is reported through 
//! [`Termination::IterationLimit`](super::report::Termination::IterationLimit).


use thiserror::Error; 


/// Solver configuration errors.  
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError { 
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },

    #[error("invalid finite-difference step: must be finite and > 0. got {got}")]
    InvalidStep      { got: f64 },
}


/// Interval and sampling errors.  
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError { 
    #[error("invalid interval: bounds must be finite with low < high. got [{low}, {high}]")]
    InvalidInterval { low: f64, high: f64 },

    #[error("too few samples: need at least 2. got {got}")]
    TooFewSamples   { got: usize },
}


/// Root-finding runtime errors.  
/// 
/// Each variant is fatal for one solver call only. Callers running several 
/// brackets or seeds are expected to record the error and move on.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no sign change on [{low}, {high}]: f(low)={f_low}, f(high)={f_high}")]
    InvalidBracket { low: f64, high: f64, f_low: f64, f_high: f64 },

    #[error("derivative numerically unstable at x={x}, f'(x)={dfx}")]
    UnstableDerivative { x: f64, dfx: f64 },

    #[error("degenerate secant: f({x_prev})={f_prev} and f({x_curr})={f_curr} are numerically identical")]
    DegenerateSecant { x_prev: f64, x_curr: f64, f_prev: f64, f_curr: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}
