//! Batch runner for the problem catalog.
//!
//! For every [`Problem`] the runner 
//! ┌ profiles the domain with the sign-change scanner,  
//! ├ decides which brackets/seeds/pairs to use ([`plan_attempts`]),  
//! ├ runs bisection, Newton and secant on each of them,  
//! └ collects every attempt, successful or not, into a [`ProblemOutcome`].  
//!
//! A failing attempt is logged and kept as an `Err`; it never stops the 
//! remaining attempts, methods or problems.

use std::collections::BTreeSet;
use std::path::PathBuf;

use log::{info, warn};
use thiserror::Error;

use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::bisection::bisection;
use crate::root_finding::config::{ScalarFn, SolverCfg, DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};
use crate::root_finding::errors::{ConfigError, DomainError, SolverError};
use crate::root_finding::interval::Interval;
use crate::root_finding::newton::newton;
use crate::root_finding::report::{BisectionStep, NewtonStep, SecantStep, SolveResult};
use crate::root_finding::scan::{profile, FunctionProfile, DEFAULT_SAMPLES};
use crate::root_finding::secant::secant;

use super::catalog::Problem;


/// Decimals used when deciding whether two roots are the same. 
pub const ROOT_DECIMALS: u32 = 4;


#[derive(Debug, Error)]
pub enum RunError { 
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}


/// Batch configuration. 
///
/// # Defaults 
/// ├ `tolerance`    = 1e-6  
/// ├ `max_iter`     = 100  
/// ├ `scan_samples` = 1000  
/// ├ `plot_samples` = 400  
/// └ `output_dir`   = `"."`  
#[derive(Debug, Clone)]
pub struct RunnerCfg { 
    pub tolerance    : f64, 
    pub max_iter     : usize, 
    pub scan_samples : usize, 
    pub plot_samples : usize, 
    pub output_dir   : PathBuf, 
}

impl Default for RunnerCfg { 
    fn default() -> Self { 
        Self { 
            tolerance    : DEFAULT_TOLERANCE, 
            max_iter     : DEFAULT_MAX_ITER, 
            scan_samples : DEFAULT_SAMPLES, 
            plot_samples : 400, 
            output_dir   : PathBuf::from("."), 
        }
    }
}


/// The solver inputs chosen for one problem. 
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptPlan { 
    pub brackets      : Vec<Interval>, 
    pub seeds         : Vec<f64>, 
    pub pairs         : Vec<(f64, f64)>, 
    pub auto_detected : bool, 
}

/// Chooses the brackets, seeds and pairs to try for `problem`. 
///
/// If the scan found **more** brackets than the catalog lists, the scanned 
/// brackets replace the catalog ones, the seeds become their midpoints and the 
/// pairs their endpoints. Only the counts are compared; the scanned brackets 
/// are not matched against the catalog ones.
pub fn plan_attempts(problem: &Problem, scanned: &[Interval]) -> AttemptPlan { 
    if !scanned.is_empty() && scanned.len() > problem.brackets.len() { 
        return AttemptPlan { 
            brackets      : scanned.to_vec(), 
            seeds         : scanned.iter().map(Interval::midpoint).collect(), 
            pairs         : scanned.iter().map(|i| (i.low(), i.high())).collect(), 
            auto_detected : true, 
        };
    }

    AttemptPlan { 
        brackets      : problem.brackets.clone(), 
        seeds         : problem.seeds.clone(), 
        pairs         : problem.pairs.clone(), 
        auto_detected : false, 
    }
}


/// Input given to one solver call. 
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AttemptInput { 
    Bracket(Interval), 
    Seed(f64), 
    Pair(f64, f64), 
}

impl std::fmt::Display for AttemptInput { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        match self { 
            AttemptInput::Bracket(i)  => write!(f, "interval [{:.2}, {:.2}]", i.low(), i.high()), 
            AttemptInput::Seed(x0)    => write!(f, "seed x0 = {x0}"), 
            AttemptInput::Pair(x0, x1) => write!(f, "points x0 = {x0}, x1 = {x1}"), 
        }
    }
}

/// One solver call and what came of it. 
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt<S> { 
    pub input   : AttemptInput, 
    pub outcome : Result<SolveResult<S>, SolverError>, 
}

impl<S> Attempt<S> { 
    pub fn root(&self) -> Option<f64> { 
        self.outcome.as_ref().ok().map(|r| r.root)
    }
}

fn roots_of<S>(attempts: &[Attempt<S>]) -> Vec<f64> { 
    attempts.iter().filter_map(Attempt::root).collect()
}


/// Everything the runner produced for one problem. 
///
/// `function`, `domain` and the per-method roots are what a plot needs.
#[derive(Clone)]
pub struct ProblemOutcome { 
    pub ordinal   : usize, 
    pub name      : &'static str, 
    pub function  : ScalarFn, 
    pub profile   : FunctionProfile, 
    pub plan      : AttemptPlan, 
    pub bisection : Vec<Attempt<BisectionStep>>, 
    pub newton    : Vec<Attempt<NewtonStep>>, 
    pub secant    : Vec<Attempt<SecantStep>>, 
}

impl ProblemOutcome { 
    pub fn domain(&self) -> Interval { 
        self.profile.domain
    }

    /// Evaluates the problem's function. 
    pub fn eval(&self, x: f64) -> f64 { 
        (self.function)(x)
    }

    /// Roots found by `algorithm`, in attempt order. 
    pub fn roots(&self, algorithm: Algorithm) -> Vec<f64> { 
        match algorithm { 
            Algorithm::Bisection => roots_of(&self.bisection), 
            Algorithm::Newton    => roots_of(&self.newton), 
            Algorithm::Secant    => roots_of(&self.secant), 
        }
    }

    pub fn all_roots(&self) -> Vec<f64> { 
        Algorithm::ALL.iter().flat_map(|&a| self.roots(a)).collect()
    }

    /// Number of distinct roots after rounding to `decimals` places. 
    pub fn distinct_roots(&self, decimals: u32) -> usize { 
        let scale = 10f64.powi(decimals as i32); 
        self.all_roots()
            .iter()
            .map(|r| (r * scale).round() as i64)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// One root is expected per bracket in use. 
    pub fn expected_roots(&self) -> usize { 
        self.plan.brackets.len()
    }

    /// `true` if the methods together found exactly the expected number of 
    /// distinct roots (at [`ROOT_DECIMALS`]). 
    pub fn is_consistent(&self) -> bool { 
        !self.all_roots().is_empty() && self.distinct_roots(ROOT_DECIMALS) == self.expected_roots()
    }

    /// `true` if every method found the same number of roots. 
    pub fn uniform_counts(&self) -> bool { 
        let b = self.roots(Algorithm::Bisection).len(); 
        b == self.roots(Algorithm::Newton).len() && b == self.roots(Algorithm::Secant).len()
    }

    /// Number of attempts that ended in an error, across all methods. 
    pub fn failures(&self) -> usize { 
        self.bisection.iter().filter(|a| a.outcome.is_err()).count()
            + self.newton.iter().filter(|a| a.outcome.is_err()).count()
            + self.secant.iter().filter(|a| a.outcome.is_err()).count()
    }
}

impl std::fmt::Debug for ProblemOutcome { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        f.debug_struct("ProblemOutcome")
            .field("ordinal", &self.ordinal)
            .field("name", &self.name)
            .field("profile", &self.profile)
            .field("plan", &self.plan)
            .field("bisection", &self.bisection)
            .field("newton", &self.newton)
            .field("secant", &self.secant)
            .finish_non_exhaustive()
    }
}


fn log_failure(ordinal: usize, algorithm: Algorithm, input: &AttemptInput, err: &SolverError) { 
    warn!("problem {ordinal}: {algorithm} failed with {input}: {err}");
}

/// Builds the solver configuration for `problem` under `cfg`. 
pub fn solver_cfg(problem: &Problem, cfg: &RunnerCfg) -> SolverCfg { 
    let solver = SolverCfg::from_shared(problem.function.clone())
        .with_tolerance(cfg.tolerance)
        .with_max_iter(cfg.max_iter);

    match &problem.derivative { 
        Some(df) => solver.with_shared_derivative(df.clone()), 
        None     => solver, 
    }
}

/// Runs every method on every planned input of `problem`. 
///
/// `ordinal` is the 1-based position of the problem in the batch; it names 
/// the plot file. 
///
/// # Errors 
/// ├ [`RunError::Config`] - `cfg` yields an invalid solver configuration.  
/// └ [`RunError::Domain`] - `cfg.scan_samples < 2`.  
///
/// Solver failures on individual inputs are *not* errors here; they are 
/// recorded in the returned [`ProblemOutcome`].
pub fn run_problem(problem: &Problem, ordinal: usize, cfg: &RunnerCfg) -> Result<ProblemOutcome, RunError> { 
    info!("problem {ordinal}: {}", problem.name);

    let solver = solver_cfg(problem, cfg); 
    solver.validate()?; 

    let profile = profile(|x| solver.eval(x), problem.domain, cfg.scan_samples)?; 
    let plan    = plan_attempts(problem, &profile.brackets()); 
    if plan.auto_detected { 
        info!(
            "problem {ordinal}: using {} auto-detected brackets instead of {} from the catalog", 
            plan.brackets.len(), problem.brackets.len()
        );
    }

    let bisection_attempts = plan.brackets
        .iter()
        .map(|&bracket| { 
            let input   = AttemptInput::Bracket(bracket); 
            let outcome = bisection(&solver, bracket.low(), bracket.high()); 
            if let Err(err) = &outcome { 
                log_failure(ordinal, Algorithm::Bisection, &input, err); 
            }
            Attempt { input, outcome }
        })
        .collect();

    let newton_attempts = plan.seeds
        .iter()
        .map(|&x0| { 
            let input   = AttemptInput::Seed(x0); 
            let outcome = newton(&solver, x0); 
            if let Err(err) = &outcome { 
                log_failure(ordinal, Algorithm::Newton, &input, err); 
            }
            Attempt { input, outcome }
        })
        .collect();

    let secant_attempts = plan.pairs
        .iter()
        .map(|&(x0, x1)| { 
            let input   = AttemptInput::Pair(x0, x1); 
            let outcome = secant(&solver, x0, x1); 
            if let Err(err) = &outcome { 
                log_failure(ordinal, Algorithm::Secant, &input, err); 
            }
            Attempt { input, outcome }
        })
        .collect();

    Ok(ProblemOutcome { 
        ordinal, 
        name     : problem.name, 
        function : solver.function().clone(), 
        profile, 
        plan, 
        bisection : bisection_attempts, 
        newton    : newton_attempts, 
        secant    : secant_attempts, 
    })
}

/// Runs [`run_problem`] on each problem, numbering them from 1. 
///
/// # Errors 
/// └ The first [`RunError`]; these depend only on `cfg`, so they hit every problem alike. 
pub fn run_catalog(problems: &[Problem], cfg: &RunnerCfg) -> Result<Vec<ProblemOutcome>, RunError> { 
    problems
        .iter()
        .enumerate()
        .map(|(i, problem)| run_problem(problem, i + 1, cfg))
        .collect()
}
