//! Scalar root finding with iteration traces.
//!
//! ┌ [`root_finding`] : bisection, Newton and secant solvers, the shared
//! │                    configuration/report/error types and the sign-change scanner
//! ├ [`problems`]     : the fixed equation catalog and the batch runner
//! └ [`report`]       : console narration and comparison plots

pub mod root_finding;
pub mod problems;
pub mod report;
