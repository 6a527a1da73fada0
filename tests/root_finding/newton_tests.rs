use approx::{assert_abs_diff_eq, assert_relative_eq};

use rootfind::problems::catalog::{cubic_exp, cubic_exp_derivative, cosine_growth, cosine_growth_derivative};
use rootfind::root_finding::config::{Derivative, SolverCfg};
use rootfind::root_finding::errors::{ConfigError, SolverError};
use rootfind::root_finding::newton::newton;
use rootfind::root_finding::report::{IterationRecord, Termination, ToleranceReason};

type TestResult = Result<(), SolverError>;

#[test]
fn finds_sqrt_2_with_analytic_derivative() -> TestResult {
    let cfg = SolverCfg::new(|x: f64| x * x - 2.0)
        .with_derivative(|x: f64| 2.0 * x)
        .with_tolerance(1e-10);

    let res = newton(&cfg, 1.0)?;

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert_eq!(res.tolerance, ToleranceReason::AbsFxReached);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(res.iterations(), 5);
    Ok(())
}

#[test]
fn cubic_exp_from_3_5() -> TestResult {
    let cfg = SolverCfg::new(cubic_exp).with_derivative(cubic_exp_derivative);
    let res = newton(&cfg, 3.5)?;

    assert_abs_diff_eq!(res.root, 3.2082198, epsilon = 1e-6);
    assert_eq!(res.iterations(), 4);
    assert_eq!(res.evaluations, 8);
    assert!(res.converged());
    Ok(())
}

#[test]
fn finite_difference_matches_analytic() -> TestResult {
    let analytic = SolverCfg::new(cosine_growth).with_derivative(cosine_growth_derivative);
    let fd       = SolverCfg::new(cosine_growth);
    assert!(matches!(analytic.derivative(), Derivative::Analytic(_)));
    assert!(matches!(fd.derivative(), Derivative::CentralDifference { .. }));

    let a = newton(&analytic, 3.5)?;
    let b = newton(&fd, 3.5)?;

    assert_abs_diff_eq!(a.root, 3.7256022, epsilon = 1e-6);
    assert_relative_eq!(a.root, b.root, max_relative = 1e-6);
    // two function calls per central-difference slope
    assert_eq!(b.evaluations, 3 * b.iterations());
    Ok(())
}

#[test]
fn trace_links_each_step_to_the_next() -> TestResult {
    let cfg = SolverCfg::new(cubic_exp).with_derivative(cubic_exp_derivative);
    let res = newton(&cfg, 7.5)?;

    assert_eq!(res.trace[0].x, 7.5);
    for pair in res.trace.windows(2) { 
        assert_eq!(pair[0].x_next, pair[1].x);
    }
    for s in &res.trace { 
        assert_eq!(s.error, (s.x_next - s.x).abs());
    }
    assert_eq!(res.root, res.trace.last().map(|s| s.x_next).unwrap());
    Ok(())
}

#[test]
fn zero_slope_is_unstable() {
    let cfg = SolverCfg::new(|x: f64| x * x + 1.0).with_derivative(|x: f64| 2.0 * x);
    let err = newton(&cfg, 0.0).unwrap_err();

    assert_eq!(err, SolverError::UnstableDerivative { x: 0.0, dfx: 0.0 });
}

#[test]
fn zero_slope_is_unstable_with_finite_difference() {
    let cfg = SolverCfg::new(|x: f64| x * x + 1.0);
    let err = newton(&cfg, 0.0).unwrap_err();

    assert!(matches!(err, SolverError::UnstableDerivative { x, .. } if x == 0.0));
}

#[test]
fn divergence_runs_out_of_iterations() -> TestResult {
    // x_next = -2x for the cube root
    let cfg = SolverCfg::new(f64::cbrt)
        .with_derivative(|x: f64| 1.0 / (3.0 * x.abs().powf(2.0 / 3.0)))
        .with_max_iter(10);

    let res = newton(&cfg, 1.0)?;

    assert_eq!(res.termination, Termination::IterationLimit);
    assert_eq!(res.tolerance, ToleranceReason::ToleranceNotReached);
    assert_eq!(res.iterations(), 10);
    assert!(res.root.abs() > 1000.0);
    Ok(())
}

#[test]
fn rejects_bad_fd_step() {
    let cfg = SolverCfg::new(cubic_exp).with_fd_step(0.0);
    let err = newton(&cfg, 3.5).unwrap_err();

    assert_eq!(err, SolverError::Config(ConfigError::InvalidStep { got: 0.0 }));
}

#[test]
fn repeated_calls_agree() -> TestResult {
    let cfg = SolverCfg::new(cubic_exp).with_derivative(cubic_exp_derivative);
    let a   = newton(&cfg, 3.5)?;
    let b   = newton(&cfg, 3.5)?;

    assert_eq!(a, b);
    Ok(())
}

#[test]
fn root_is_last_estimate() -> TestResult {
    let res = newton(&SolverCfg::new(cosine_growth), 3.5)?;

    assert_eq!(res.trace.last().map(IterationRecord::estimate), Some(res.root));
    assert_eq!(res.final_residual(), res.trace.last().map(|s| s.fx));
    Ok(())
}
