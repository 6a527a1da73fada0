//! Root-finding algorithm definitions.  
//!
//! Provides the [`Algorithm`] enum naming every supported method. The name is 
//! stamped into each [`SolveResult`](super::report::SolveResult) and used by the 
//! console report and the plot legend.  


/// Root-finding algorithm variants. 
/// ┌ [`Algorithm::Bisection`] : bracketing, halves `[low, high]` each step
/// ├ [`Algorithm::Newton`]    : open, one-point tangent update 
/// └ [`Algorithm::Secant`]    : open, two-point chord update 
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm { 
    Bisection, 
    Newton,
    Secant,
}

impl Algorithm { 
    /// Every algorithm, in report order. 
    pub const ALL: [Algorithm; 3] = [Algorithm::Bisection, Algorithm::Newton, Algorithm::Secant];

    /// Short machine name (e.g. `"bisection"`). 
    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Algorithm::Bisection => "bisection", 
            Algorithm::Newton    => "newton",
            Algorithm::Secant    => "secant",
        }
    }

    /// Human-readable title used in section headers and plot legends. 
    pub const fn title(self) -> &'static str { 
        match self { 
            Algorithm::Bisection => "Bisection (binary search)", 
            Algorithm::Newton    => "Newton (tangent)",
            Algorithm::Secant    => "Secant (chord)",
        }
    }
}

impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
