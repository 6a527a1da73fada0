//! Closed interval `[low, high]` with `low < high`.

use super::errors::DomainError;


/// A finite interval with `low < high`. 
///
/// Only constructible through [`Interval::new`], so every value in circulation 
/// satisfies the invariant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval { 
    low  : f64, 
    high : f64, 
}

impl Interval { 
    /// # Errors 
    /// └ [`DomainError::InvalidInterval`] if either bound is NaN/inf or `low >= high`. 
    pub fn new(low: f64, high: f64) -> Result<Self, DomainError> { 
        if !(low.is_finite() && high.is_finite()) || low >= high { 
            return Err(DomainError::InvalidInterval { low, high });
        }
        Ok(Self { low, high })
    }

    #[inline] #[must_use] pub fn low(&self)  -> f64 { self.low }
    #[inline] #[must_use] pub fn high(&self) -> f64 { self.high }

    #[inline] #[must_use] 
    pub fn midpoint(&self) -> f64 { 
        (self.low + self.high) / 2.0
    }

    #[inline] #[must_use] 
    pub fn width(&self) -> f64 { 
        self.high - self.low
    }

    #[inline] #[must_use] 
    pub fn contains(&self, x: f64) -> bool { 
        self.low <= x && x <= self.high
    }

    /// `n` evenly spaced points from `low` to `high` inclusive. 
    ///
    /// The last point is exactly `high`. `n == 1` yields `[low]`, `n == 0` nothing.
    pub fn linspace(&self, n: usize) -> Vec<f64> { 
        match n { 
            0 => Vec::new(), 
            1 => vec![self.low], 
            _ => { 
                let step = self.width() / (n - 1) as f64; 
                (0..n)
                    .map(|i| if i == n - 1 { self.high } else { self.low + step * i as f64 })
                    .collect()
            }
        }
    }
}

impl std::fmt::Display for Interval { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
