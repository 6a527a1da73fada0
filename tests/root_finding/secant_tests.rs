use approx::assert_abs_diff_eq;
use rstest::rstest;

use rootfind::problems::catalog::{cubic_decay, cubic_exp, damped_sine};
use rootfind::root_finding::config::SolverCfg;
use rootfind::root_finding::errors::SolverError;
use rootfind::root_finding::report::{IterationRecord, Termination, ToleranceReason};
use rootfind::root_finding::secant::secant;

type TestResult = Result<(), SolverError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let cfg = SolverCfg::new(|x: f64| x * x - 2.0).with_tolerance(1e-10);
    let res = secant(&cfg, 1.0, 2.0)?;

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn cubic_exp_from_3_and_4() -> TestResult {
    let cfg = SolverCfg::new(cubic_exp);
    let res = secant(&cfg, 3.0, 4.0)?;

    assert_abs_diff_eq!(res.root, 3.2082198, epsilon = 1e-6);
    assert_eq!(res.iterations(), 5);
    assert_eq!(res.tolerance, ToleranceReason::StepSizeReached);
    // f(x_prev) is carried between steps
    assert_eq!(res.evaluations, res.iterations() + 1);
    Ok(())
}

#[rstest]
#[case(-1.5, -0.5, -1.2340933)]
#[case( 0.0,  1.0,  0.3154660)]
#[case( 1.5,  2.0,  1.7802405)]
fn cubic_decay_roots(#[case] x0: f64, #[case] x1: f64, #[case] expected: f64) -> TestResult {
    let res = secant(&SolverCfg::new(cubic_decay), x0, x1)?;

    assert!(res.converged());
    assert_abs_diff_eq!(res.root, expected, epsilon = 1e-6);
    Ok(())
}

#[test]
fn trace_shifts_points() -> TestResult {
    let res = secant(&SolverCfg::new(damped_sine), 5.0, 6.0)?;

    assert_eq!((res.trace[0].x_prev, res.trace[0].x_curr), (5.0, 6.0));
    for pair in res.trace.windows(2) { 
        assert_eq!(pair[1].x_prev, pair[0].x_curr);
        assert_eq!(pair[1].x_curr, pair[0].x_next);
    }
    assert_abs_diff_eq!(res.root, 5.7064180, epsilon = 1e-6);
    Ok(())
}

#[test]
fn equal_values_are_degenerate() {
    let cfg = SolverCfg::new(|x: f64| x * x);
    let err = secant(&cfg, -1.0, 1.0).unwrap_err();

    assert_eq!(
        err,
        SolverError::DegenerateSecant { x_prev: -1.0, x_curr: 1.0, f_prev: 1.0, f_curr: 1.0 }
    );
}

#[test]
fn non_finite_seed() {
    let cfg = SolverCfg::new(f64::ln);
    let err = secant(&cfg, -1.0, 2.0).unwrap_err();

    assert!(matches!(err, SolverError::NonFiniteEvaluation { x, .. } if x == -1.0));
}

#[test]
fn iteration_limit_is_not_an_error() -> TestResult {
    let cfg = SolverCfg::new(cubic_exp).with_max_iter(2);
    let res = secant(&cfg, 3.0, 4.0)?;

    assert_eq!(res.termination, Termination::IterationLimit);
    assert_eq!(res.iterations(), 2);
    assert_eq!(res.root, res.trace[1].x_next);
    Ok(())
}

#[test]
fn repeated_calls_agree() -> TestResult {
    let cfg = SolverCfg::new(cubic_exp);
    let a   = secant(&cfg, 3.0, 4.0)?;
    let b   = secant(&cfg, 3.0, 4.0)?;

    assert_eq!(a, b);
    Ok(())
}

#[test]
fn root_is_last_estimate() -> TestResult {
    let res = secant(&SolverCfg::new(damped_sine), 5.0, 6.0)?;

    assert_eq!(res.trace.last().map(IterationRecord::estimate), Some(res.root));
    assert_eq!(res.final_residual(), res.trace.last().map(|s| s.f_curr));
    Ok(())
}
