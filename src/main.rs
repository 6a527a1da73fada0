//! Runs the fixed equation catalog, prints the report and writes one chart
//! per problem into the working directory.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::error::Error;
use std::io::{self, Write};

use log::{info, warn, LevelFilter};

use rootfind::problems::catalog::catalog;
use rootfind::problems::runner::{run_catalog, RunnerCfg};
use rootfind::report::console::write_report;
use rootfind::report::plot::plot_problem;

fn init_logger() {
    env_logger::builder()
        .default_format()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logger();

    let cfg      = RunnerCfg::default();
    let problems = catalog()?;
    let outcomes = run_catalog(&problems, &cfg)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &outcomes)?;
    out.flush()?;

    for outcome in &outcomes {
        match plot_problem(outcome, &cfg.output_dir, cfg.plot_samples) {
            Ok(path) => info!("problem {}: chart saved to {}", outcome.ordinal, path.display()),
            Err(err) => warn!("problem {}: chart not written: {err}", outcome.ordinal),
        }
    }

    Ok(())
}
