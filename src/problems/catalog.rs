//! The fixed catalog of test equations.
//!
//! Each [`Problem`] carries the function, its analytic derivative, the domain 
//! to scan and plot, and the hand-picked brackets, Newton seeds and secant 
//! pairs to try.

use std::sync::Arc;

use crate::root_finding::config::ScalarFn;
use crate::root_finding::errors::DomainError;
use crate::root_finding::interval::Interval;


/// One equation `f(x) = 0` with its solver inputs. 
#[derive(Clone)]
pub struct Problem { 
    pub name       : &'static str, 
    pub function   : ScalarFn, 
    pub derivative : Option<ScalarFn>, 
    pub domain     : Interval, 
    pub brackets   : Vec<Interval>, 
    pub seeds      : Vec<f64>, 
    pub pairs      : Vec<(f64, f64)>, 
}

impl std::fmt::Debug for Problem { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        f.debug_struct("Problem")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .field("brackets", &self.brackets)
            .field("seeds", &self.seeds)
            .field("pairs", &self.pairs)
            .finish_non_exhaustive()
    }
}


/// `x^3 - e^(0.8x) - 20`
pub fn cubic_exp(x: f64) -> f64 { 
    x.powi(3) - (0.8 * x).exp() - 20.0
}
pub fn cubic_exp_derivative(x: f64) -> f64 { 
    3.0 * x.powi(2) - 0.8 * (0.8 * x).exp()
}

/// `3 sin(0.5x) - 0.5x + 2`
pub fn damped_sine(x: f64) -> f64 { 
    3.0 * (0.5 * x).sin() - 0.5 * x + 2.0
}
pub fn damped_sine_derivative(x: f64) -> f64 { 
    1.5 * (0.5 * x).cos() - 0.5
}

/// `x^3 - x^2 e^(-0.5x) - 3x + 1`
pub fn cubic_decay(x: f64) -> f64 { 
    x.powi(3) - x.powi(2) * (-0.5 * x).exp() - 3.0 * x + 1.0
}
pub fn cubic_decay_derivative(x: f64) -> f64 { 
    let e = (-0.5 * x).exp(); 
    3.0 * x.powi(2) - (2.0 * x * e - 0.5 * x.powi(2) * e) - 3.0
}

/// `cos^2(x) - 0.5x e^(0.3x) + 5`
pub fn cosine_growth(x: f64) -> f64 { 
    x.cos().powi(2) - 0.5 * x * (0.3 * x).exp() + 5.0
}
pub fn cosine_growth_derivative(x: f64) -> f64 { 
    let e = (0.3 * x).exp(); 
    -2.0 * x.cos() * x.sin() - 0.5 * (e + 0.3 * x * e)
}


fn intervals(bounds: &[(f64, f64)]) -> Result<Vec<Interval>, DomainError> { 
    bounds.iter().map(|&(low, high)| Interval::new(low, high)).collect()
}

fn problem(
    name: &'static str, 
    function: fn(f64) -> f64, 
    derivative: fn(f64) -> f64, 
    domain: (f64, f64), 
    brackets: &[(f64, f64)], 
    seeds: &[f64], 
) -> Result<Problem, DomainError> { 
    Ok(Problem { 
        name, 
        function   : Arc::new(function), 
        derivative : Some(Arc::new(derivative)), 
        domain     : Interval::new(domain.0, domain.1)?, 
        brackets   : intervals(brackets)?, 
        seeds      : seeds.to_vec(), 
        pairs      : brackets.to_vec(), 
    })
}


/// The four catalog problems, in report order. 
///
/// Secant pairs reuse the bracket endpoints.
pub fn catalog() -> Result<Vec<Problem>, DomainError> { 
    Ok(vec![
        problem(
            "x^3 - e^(0.8x) = 20 on 0 <= x <= 8", 
            cubic_exp, cubic_exp_derivative, 
            (0.0, 8.0), 
            &[(3.0, 4.0), (7.0, 8.0)], 
            &[3.5, 7.5], 
        )?,
        problem(
            "3 sin(0.5x) - 0.5x + 2 = 0", 
            damped_sine, damped_sine_derivative, 
            (0.0, 10.0), 
            &[(5.0, 6.0)], 
            &[5.5], 
        )?,
        problem(
            "x^3 - x^2 e^(-0.5x) - 3x = -1", 
            cubic_decay, cubic_decay_derivative, 
            (-2.0, 4.0), 
            &[(-1.5, -0.5), (0.0, 1.0), (1.5, 2.0)], 
            &[-1.0, 0.5, 1.8], 
        )?,
        problem(
            "cos^2(x) - 0.5x e^(0.3x) + 5 = 0", 
            cosine_growth, cosine_growth_derivative, 
            (0.0, 10.0), 
            &[(3.0, 4.0)], 
            &[3.5], 
        )?,
    ])
}
