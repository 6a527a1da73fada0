//! Console narration of a batch run.
//!
//! The text is meant for people, not parsers. Every function takes a writer 
//! so tests can capture the output in a `Vec<u8>`.

use std::io::{self, Write};

use crate::problems::runner::{Attempt, ProblemOutcome, ROOT_DECIMALS};
use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::report::IterationRecord;

const WIDE: usize   = 80;
const NARROW: usize = 40;


pub fn write_banner<W: Write>(w: &mut W) -> io::Result<()> { 
    writeln!(w, "NUMERICAL ROOT ANALYSIS: BISECTION, NEWTON AND SECANT")?; 
    writeln!(w, "{}", "=".repeat(60))
}

fn write_section<W: Write>(w: &mut W, title: &str) -> io::Result<()> { 
    writeln!(w)?; 
    writeln!(w, "{}", "-".repeat(NARROW))?; 
    writeln!(w, "{title}")?; 
    writeln!(w, "{}", "-".repeat(NARROW))
}

fn format_roots(roots: &[f64]) -> String { 
    let parts: Vec<String> = roots.iter().map(|r| format!("{r:.6}")).collect(); 
    format!("[{}]", parts.join(", "))
}

fn write_attempts<W, S>(
    w: &mut W, 
    outcome: &ProblemOutcome, 
    attempts: &[Attempt<S>], 
) -> io::Result<()> 
where 
    W: Write, 
    S: IterationRecord, 
{ 
    if attempts.is_empty() { 
        return writeln!(w, "   (nothing to try)");
    }

    for (i, attempt) in attempts.iter().enumerate() { 
        match &attempt.outcome { 
            Ok(result) => { 
                let root = result.root; 
                writeln!(w, "   [OK] Root {} from {}: {root:.8}", i + 1, attempt.input)?; 
                writeln!(w, "        f({root:.6}) = {:.2e}", outcome.eval(root))?; 
                writeln!(w, "        Steps: {}", result.iterations())?; 
                if let Some(err) = result.final_error() { 
                    writeln!(w, "        Final error: {err:.2e}")?; 
                }
                if let Some(fx) = result.final_residual() { 
                    writeln!(w, "        Last checked |f|: {:.2e}", fx.abs())?; 
                }
                if !result.converged() { 
                    writeln!(w, "        [WARN] iteration limit reached before tolerance")?; 
                }
            }
            Err(err) => { 
                writeln!(w, "   [ERROR] With {}: {err}", attempt.input)?; 
            }
        }
    }
    Ok(())
}

fn write_scan<W: Write>(w: &mut W, outcome: &ProblemOutcome) -> io::Result<()> { 
    let profile = &outcome.profile; 
    let domain  = profile.domain; 

    writeln!(w)?; 
    writeln!(w, "SCANNING {}:", outcome.name)?; 
    writeln!(w, "   Output range: [{:.4}, {:.4}]", profile.min, profile.max)?; 

    if profile.sign_changes.is_empty() { 
        writeln!(w, "   [ERROR] No sign change detected on [{}, {}]", domain.low(), domain.high())?; 
    }
    for change in &profile.sign_changes { 
        writeln!(
            w, 
            "   [OK] Sign change near x ~ {:.4} in [{:.2}, {:.2}]", 
            change.estimate, change.interval.low(), change.interval.high()
        )?; 
    }
    if outcome.plan.auto_detected { 
        writeln!(w, "   [INFO] Using automatically detected intervals")?; 
    }
    Ok(())
}

/// Writes everything known about one problem. 
pub fn write_problem<W: Write>(w: &mut W, outcome: &ProblemOutcome) -> io::Result<()> { 
    writeln!(w)?; 
    writeln!(w, "{}", "=".repeat(WIDE))?; 
    writeln!(w, "PROBLEM {}: {}", outcome.ordinal, outcome.name)?; 
    writeln!(w, "{}", "=".repeat(WIDE))?; 

    write_scan(w, outcome)?; 

    write_section(w, &format!("1. {}", Algorithm::Bisection.title()))?; 
    write_attempts(w, outcome, &outcome.bisection)?; 

    write_section(w, &format!("2. {}", Algorithm::Newton.title()))?; 
    write_attempts(w, outcome, &outcome.newton)?; 

    write_section(w, &format!("3. {}", Algorithm::Secant.title()))?; 
    write_attempts(w, outcome, &outcome.secant)?; 

    write_section(w, "METHOD COMPARISON")?; 
    for algorithm in Algorithm::ALL { 
        writeln!(w, "   {:<28} {}", algorithm.title(), format_roots(&outcome.roots(algorithm)))?; 
    }
    if !outcome.all_roots().is_empty() { 
        if outcome.is_consistent() { 
            writeln!(w, "   [OK] All methods agree")?; 
        } else { 
            writeln!(w, "   [WARN] Number of distinct roots differs from the number of intervals")?; 
        }
    }
    Ok(())
}

/// Writes the closing summary over all problems. 
pub fn write_summary<W: Write>(w: &mut W, outcomes: &[ProblemOutcome]) -> io::Result<()> { 
    writeln!(w)?; 
    writeln!(w, "{}", "=".repeat(WIDE))?; 
    writeln!(w, "FINAL REPORT: METHOD COMPARISON")?; 
    writeln!(w, "{}", "=".repeat(WIDE))?; 

    for outcome in outcomes { 
        writeln!(w)?; 
        writeln!(w, "PROBLEM {}: {}", outcome.ordinal, outcome.name)?; 

        if outcome.all_roots().is_empty() { 
            writeln!(w, "   [ERROR] No real roots found by any method")?; 
            continue;
        }
        for algorithm in Algorithm::ALL { 
            writeln!(w, "   {:<28} {}", algorithm.title(), format_roots(&outcome.roots(algorithm)))?; 
        }
        writeln!(w, "   Distinct roots: {}", outcome.distinct_roots(ROOT_DECIMALS))?; 
        if outcome.uniform_counts() { 
            writeln!(w, "   [OK] Every method found the same number of roots")?; 
        } else { 
            writeln!(w, "   [WARN] Methods found different numbers of roots")?; 
        }
    }
    Ok(())
}

/// Banner, every problem, then the summary. 
pub fn write_report<W: Write>(w: &mut W, outcomes: &[ProblemOutcome]) -> io::Result<()> { 
    write_banner(w)?; 
    for outcome in outcomes { 
        write_problem(w, outcome)?; 
    }
    write_summary(w, outcomes)
}
