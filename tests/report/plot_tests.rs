use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use rootfind::problems::catalog::{catalog, Problem};
use rootfind::problems::runner::{run_catalog, run_problem, RunnerCfg};
use rootfind::report::plot::{plot_file_name, plot_problem, PlotData, PlotError};
use rootfind::root_finding::algorithms::Algorithm;
use rootfind::root_finding::interval::Interval;

#[test]
fn file_names_follow_ordinal() {
    assert_eq!(plot_file_name(1), "problem_1_solution.png");
    assert_eq!(plot_file_name(4), "problem_4_solution.png");
}

#[test]
fn plot_data_marks_every_root() -> Result<(), PlotError> {
    let outcomes = run_catalog(&catalog().unwrap(), &RunnerCfg::default()).unwrap();
    let data     = PlotData::new(&outcomes[2], 400)?;

    assert_eq!(data.title, "PROBLEM 3: x^3 - x^2 e^(-0.5x) - 3x = -1");
    assert_eq!(data.curve.len(), 400);
    assert_eq!(data.markers.len(), 9);
    for algorithm in Algorithm::ALL { 
        assert_eq!(data.markers.iter().filter(|m| m.algorithm == algorithm).count(), 3);
    }
    for m in &data.markers { 
        assert!(m.y.abs() < 1e-4);
    }

    let (lo, hi) = data.y_range;
    assert!(data.curve.iter().all(|&(_, y)| lo < y && y < hi));
    Ok(())
}

#[test]
fn plot_data_drops_non_finite_samples() -> Result<(), PlotError> {
    let problem = Problem { 
        name       : "ln(x) = 0", 
        function   : Arc::new(f64::ln), 
        derivative : None, 
        domain     : Interval::new(0.0, 2.0).unwrap(), 
        brackets   : vec![Interval::new(0.5, 1.5).unwrap()], 
        seeds      : vec![1.5], 
        pairs      : vec![(0.5, 1.5)], 
    };
    let outcome = run_problem(&problem, 1, &RunnerCfg::default()).unwrap();
    let data    = PlotData::new(&outcome, 5)?;

    // ln(0) is dropped
    assert_eq!(data.curve.len(), 4);
    assert_eq!(data.markers.len(), 3);
    Ok(())
}

#[test]
fn empty_range_when_nothing_is_finite() {
    let problem = Problem { 
        name       : "nan", 
        function   : Arc::new(|_: f64| f64::NAN), 
        derivative : None, 
        domain     : Interval::new(0.0, 1.0).unwrap(), 
        brackets   : Vec::new(), 
        seeds      : Vec::new(), 
        pairs      : Vec::new(), 
    };
    let outcome = run_problem(&problem, 1, &RunnerCfg::default()).unwrap();

    assert!(matches!(PlotData::new(&outcome, 10), Err(PlotError::EmptyRange)));
}

#[test]
fn roots_outside_the_domain_keep_their_marker() -> Result<(), PlotError> {
    // Newton from 0.5 runs to +2, right of the domain
    let problem = Problem { 
        name       : "x^2 - 4 = 0", 
        function   : Arc::new(|x: f64| x * x - 4.0), 
        derivative : Some(Arc::new(|x: f64| 2.0 * x)), 
        domain     : Interval::new(-3.0, 1.0).unwrap(), 
        brackets   : vec![Interval::new(-3.0, -1.0).unwrap()], 
        seeds      : vec![0.5], 
        pairs      : vec![(-3.0, -1.0)], 
    };
    let outcome = run_problem(&problem, 1, &RunnerCfg::default()).unwrap();
    let data    = PlotData::new(&outcome, 50)?;

    assert_eq!(data.markers.len(), outcome.all_roots().len());
    assert_eq!(data.markers.len(), 3);

    let newton: Vec<_> = data.markers.iter().filter(|m| m.algorithm == Algorithm::Newton).collect();
    assert_eq!(newton.len(), 1);
    assert!((newton[0].x - 2.0).abs() < 1e-6);

    let (x0, x1) = data.x_range;
    assert_eq!(x0, -3.0);
    assert!(x1 >= newton[0].x);
    let (y0, y1) = data.y_range;
    assert!(data.markers.iter().all(|m| y0 < m.y && m.y < y1));
    Ok(())
}

fn scratch_dir(name: &str) -> PathBuf { 
    let dir = std::env::temp_dir().join(format!("rootfind-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn plot_problem_writes_png() {
    let outcomes = run_catalog(&catalog().unwrap(), &RunnerCfg::default()).unwrap();
    let dir      = scratch_dir("charts");

    match plot_problem(&outcomes[1], &dir, 200) { 
        Ok(path) => { 
            assert_eq!(path, dir.join(plot_file_name(2)));
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("problem_2_solution.png"));
            assert!(fs::metadata(&path).unwrap().len() > 0);
        }
        // no usable font on this machine
        Err(PlotError::Drawing(_)) => {}
        Err(err) => panic!("unexpected error: {err}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn plot_problem_reports_unusable_directory() {
    let outcomes = run_catalog(&catalog().unwrap(), &RunnerCfg::default()).unwrap();
    let dir      = scratch_dir("blocked");
    fs::create_dir_all(&dir).unwrap();

    // a regular file where the output directory should go
    let blocker = dir.join("not_a_dir");
    fs::write(&blocker, b"x").unwrap();

    let err = plot_problem(&outcomes[0], &blocker.join("charts"), 50).unwrap_err();
    assert!(matches!(err, PlotError::Io(_)));

    let _ = fs::remove_dir_all(&dir);
}
