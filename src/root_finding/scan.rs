//! Sign-change scanning.  
//! 
//! Samples a function on an evenly spaced grid and reports every adjacent pair 
//! of samples whose values have strictly opposite signs. Each such pair is a 
//! candidate bracket for [`bisection`](super::bisection::bisection) and a 
//! source of seeds for the open methods.
//!
//! ┌ [`scan_sign_changes`] : brackets only  
//! └ [`profile`]           : brackets, root estimates and sampled value range  


use super::errors::DomainError;
use super::interval::Interval;
use super::signs::opposite_sign;


/// Default number of samples (999 sub-intervals).
pub const DEFAULT_SAMPLES: usize = 1000;


/// A bracket found by the scanner and a linear-interpolation root estimate inside it. 
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SignChange { 
    pub interval : Interval, 
    pub estimate : f64, 
}

/// What a dense scan learned about `f` on a domain. 
///
/// [`FunctionProfile`] 
/// ├ `domain`       : scanned interval  
/// ├ `min`, `max`   : extrema of the finite sampled values (NaN if none were finite)  
/// └ `sign_changes` : brackets in increasing `x`  
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionProfile { 
    pub domain       : Interval, 
    pub min          : f64, 
    pub max          : f64, 
    pub sign_changes : Vec<SignChange>, 
}

impl FunctionProfile { 
    pub fn brackets(&self) -> Vec<Interval> { 
        self.sign_changes.iter().map(|s| s.interval).collect()
    }
}


/// Samples `f` at `samples` evenly spaced points of `domain`. 
fn sample<F>(f: F, domain: Interval, samples: usize) -> Result<Vec<(f64, f64)>, DomainError> 
where F: Fn(f64) -> f64 { 
    if samples < 2 { 
        return Err(DomainError::TooFewSamples { got: samples });
    }

    Ok(domain.linspace(samples).into_iter().map(|x| (x, f(x))).collect())
}

/// Zero of the chord through `(x0, y0)` and `(x1, y1)`, assuming opposite signs. 
#[inline] 
fn chord_estimate((x0, y0): (f64, f64), (x1, y1): (f64, f64)) -> f64 { 
    x0 + (x1 - x0) * y0.abs() / (y0.abs() + y1.abs())
}

fn sign_changes(points: &[(f64, f64)]) -> Result<Vec<SignChange>, DomainError> { 
    points
        .windows(2)
        .filter(|w| opposite_sign(w[0].1, w[1].1))
        .map(|w| { 
            Ok(SignChange { 
                interval : Interval::new(w[0].0, w[1].0)?, 
                estimate : chord_estimate(w[0], w[1]), 
            })
        })
        .collect()
}


/// Finds every sub-interval of `domain` on which `f` changes sign. 
///
/// # Arguments 
/// ├ `f`       - function to scan 
/// ├ `domain`  - interval to partition 
/// └ `samples` - number of sample points, `samples - 1` sub-intervals 
///
/// # Returns 
/// └ Brackets in increasing `x`. A sample where `f` is exactly zero (or NaN) 
///   never forms a sign change with its neighbours. 
///
/// # Errors 
/// └ [`DomainError::TooFewSamples`] - `samples < 2`. 
pub fn scan_sign_changes<F>(
    f: F, 
    domain: Interval, 
    samples: usize, 
) -> Result<Vec<Interval>, DomainError> 
where F: Fn(f64) -> f64 { 
    let points = sample(f, domain, samples)?; 
    Ok(sign_changes(&points)?.into_iter().map(|s| s.interval).collect())
}


/// Scans `domain` like [`scan_sign_changes`] and also records the range of 
/// sampled values and a root estimate per bracket. 
///
/// # Errors 
/// └ [`DomainError::TooFewSamples`] - `samples < 2`. 
pub fn profile<F>(
    f: F, 
    domain: Interval, 
    samples: usize, 
) -> Result<FunctionProfile, DomainError> 
where F: Fn(f64) -> f64 { 
    let points = sample(f, domain, samples)?; 

    let (min, max) = points
        .iter()
        .map(|&(_, y)| y)
        .filter(|y| y.is_finite())
        .fold((f64::NAN, f64::NAN), |(lo, hi), y| (lo.min(y), hi.max(y)));

    Ok(FunctionProfile { 
        domain, 
        min, 
        max, 
        sign_changes: sign_changes(&points)?, 
    })
}
