//! Root-finding algorithm definitions.  
//!
//! Provides the [`Method`] enum, which enumerates all supported methods, 
//! along with the shared defaults used when a caller does not override them.  

use std::str::FromStr;

use super::errors::AlgorithmError;


/// Default left endpoint of the search bracket. 
pub const DEFAULT_LEFT: f64 = 0.1;

/// Default right endpoint of the search bracket. 
pub const DEFAULT_RIGHT: f64 = 56.0;

/// Default convergence tolerance (interval width / residual). 
pub const DEFAULT_TOLERANCE: f64 = 1e-2;

/// Default iteration cap shared by all methods. 
pub const DEFAULT_MAX_ITER: usize = 1000;


/// Root-finding method variants. 
/// - [`Method::Bisection`]   : halves the bracket every iteration 
/// - [`Method::Muller`]      : quadratic interpolation through three points 
/// - [`Method::RegulaFalsi`] : false position (secant through the bracket)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method { 
    Bisection, 
    Muller, 
    RegulaFalsi,
}

impl Method { 
    pub const ALL: [Method; 3] = [Method::Bisection, Method::Muller, Method::RegulaFalsi];

    /// Algorithm names reported in [`crate::root_finding::report::RootFindingReport`]. 
    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Method::Bisection   => "bisection", 
            Method::Muller      => "muller", 
            Method::RegulaFalsi => "regula_falsi", 
        }
    }

    /// Short tag accepted by [`Method::from_str`] and used by the exporters. 
    pub const fn tag(self) -> &'static str { 
        match self { 
            Method::Bisection   => "bisection", 
            Method::Muller      => "muller", 
            Method::RegulaFalsi => "regula", 
        }
    }

    /// Column header of the tabular trace, iteration index included. 
    pub const fn columns(self) -> &'static [&'static str] { 
        match self { 
            Method::Bisection => &[
                "iteration", "Xleft", "Xright", "f(Xl)", "f(Xr)", "f(mid)", "Xmid", "tolerance",
            ], 
            Method::Muller => &[
                "iteration", "Xleft", "Xmid", "Xright", "a", "b", "c", "tolerance",
            ], 
            Method::RegulaFalsi => &[
                "iteration", "Xleft", "Xright", "f(Xl)", "f(Xr)", "tolerance",
            ], 
        }
    }
}

impl std::fmt::Display for Method { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}

/// Accepts the short tags (`bisection`, `muller`, `regula`) and the 
/// algorithm names. Anything else is rejected. 
impl FromStr for Method { 
    type Err = AlgorithmError; 

    fn from_str(s: &str) -> Result<Self, Self::Err> { 
        Method::ALL
            .into_iter()
            .find(|m| m.tag() == s || m.algorithm_name() == s)
            .ok_or_else(|| AlgorithmError::UnsupportedMethod { tag: s.to_string() })
    }
}
