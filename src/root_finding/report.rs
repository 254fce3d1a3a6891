//! Defines the [`RootFindingReport`] struct returned by all 
//! root-finding algorithms, and the per-iteration [`Trace`] it carries. 

use super::algorithms::Method;


/// Reasons a root-finding algorithm may terminate.
/// - [`Termination::Converged`]         : tolerance met (width or residual)  
/// - [`Termination::IterationLimit`]    : `max_iter` iterations without convergence  
/// - [`Termination::ComplexRoots`]      : Müller only, both quadratic roots complex  
/// - [`Termination::DegenerateBracket`] : regula falsi only, the false-position 
///   residual shares its sign with both endpoint residuals
#[derive(Debug, Clone, Copy, PartialEq, Eq)] 
pub enum Termination { 
    Converged, 
    IterationLimit,
    ComplexRoots, 
    DegenerateBracket, 
}

impl std::fmt::Display for Termination { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        let s = match self { 
            Termination::Converged         => "converged", 
            Termination::IterationLimit    => "iteration limit reached", 
            Termination::ComplexRoots      => "stopped by complex roots", 
            Termination::DegenerateBracket => "degenerate bracket", 
        };
        f.write_str(s)
    }
}


/// One bisection iteration. Endpoints and values are those at the start of 
/// the iteration; `err` is the bracket width after the update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionRecord { 
    pub xl    : f64, 
    pub xr    : f64, 
    pub f_xl  : f64, 
    pub f_xr  : f64, 
    pub x_mid : f64, 
    pub f_mid : f64, 
    pub err   : f64, 
}

/// One Müller iteration: the interpolation triple, the coefficients of the 
/// fitted parabola `a t² + b t + c` with `t = x - xm`, and the width after 
/// the update.
///
/// A residual hit appends a collapsed record after the iteration's own: 
/// `xl = xm = xr = root`, the same coefficients, and `err = 0` since the 
/// bracket has zero width. `err` is always a width, never the tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MullerRecord { 
    pub xl  : f64, 
    pub xm  : f64, 
    pub xr  : f64, 
    pub a   : f64, 
    pub b   : f64, 
    pub c   : f64, 
    pub err : f64, 
}

/// One regula falsi iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegulaFalsiRecord { 
    pub xl   : f64, 
    pub xr   : f64, 
    pub f_xl : f64, 
    pub f_xr : f64, 
    pub err  : f64, 
}

impl BisectionRecord { 
    /// Values in [`Method::columns`] order, iteration index excluded. 
    pub fn values(&self) -> [f64; 7] { 
        [self.xl, self.xr, self.f_xl, self.f_xr, self.f_mid, self.x_mid, self.err]
    }
}

impl MullerRecord { 
    pub fn values(&self) -> [f64; 7] { 
        [self.xl, self.xm, self.xr, self.a, self.b, self.c, self.err]
    }
}

impl RegulaFalsiRecord { 
    pub fn values(&self) -> [f64; 5] { 
        [self.xl, self.xr, self.f_xl, self.f_xr, self.err]
    }
}


/// Chronological per-iteration history of a single solve call. 
///
/// The variant fixes both the producing [`Method`] and the record shape, 
/// so exporters cannot pair a trace with the wrong column schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace { 
    Bisection(Vec<BisectionRecord>), 
    Muller(Vec<MullerRecord>), 
    RegulaFalsi(Vec<RegulaFalsiRecord>), 
}

impl Trace { 
    pub fn method(&self) -> Method { 
        match self { 
            Trace::Bisection(_)   => Method::Bisection, 
            Trace::Muller(_)      => Method::Muller, 
            Trace::RegulaFalsi(_) => Method::RegulaFalsi, 
        }
    }

    pub fn len(&self) -> usize { 
        match self { 
            Trace::Bisection(r)   => r.len(), 
            Trace::Muller(r)      => r.len(), 
            Trace::RegulaFalsi(r) => r.len(), 
        }
    }

    pub fn is_empty(&self) -> bool { 
        self.len() == 0
    }

    /// Error metric of every record, in order. 
    pub fn errors(&self) -> Vec<f64> { 
        match self { 
            Trace::Bisection(r)   => r.iter().map(|rec| rec.err).collect(), 
            Trace::Muller(r)      => r.iter().map(|rec| rec.err).collect(), 
            Trace::RegulaFalsi(r) => r.iter().map(|rec| rec.err).collect(), 
        }
    }

    /// Numeric rows in [`Method::columns`] order without the iteration index.
    pub fn rows(&self) -> Vec<Vec<f64>> { 
        match self { 
            Trace::Bisection(r)   => r.iter().map(|rec| rec.values().to_vec()).collect(), 
            Trace::Muller(r)      => r.iter().map(|rec| rec.values().to_vec()).collect(), 
            Trace::RegulaFalsi(r) => r.iter().map(|rec| rec.values().to_vec()).collect(), 
        }
    }
}


/// Final report returned by all root-finding algorithms.  
/// 
/// [`RootFindingReport`]
/// - `root`        : best root estimate  
/// - `f_root`      : function value at `root`  
/// - `iterations`  : loop iterations executed  
/// - `evals`       : total function evaluations  
/// - `termination` : why the solver stopped ([`Termination`])  
/// - `method`      : producing method  
/// - `trace`       : per-iteration records ([`Trace`])  
#[derive(Debug, Clone, PartialEq)] 
pub struct RootFindingReport {
    pub root        : f64, 
    pub f_root      : f64, 
    pub iterations  : usize, 
    pub evals       : usize, 
    pub termination : Termination, 
    pub method      : Method, 
    pub trace       : Trace, 
}

impl RootFindingReport { 
    /// `true` only for [`Termination::Converged`]. 
    pub fn converged(&self) -> bool { 
        self.termination == Termination::Converged
    }

    pub fn algorithm_name(&self) -> &'static str { 
        self.method.algorithm_name()
    }
}

impl std::fmt::Display for RootFindingReport { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(
            f, 
            "{}: root={} f(root)={:e} iterations={} evals={} ({})", 
            self.method, self.root, self.f_root, self.iterations, self.evals, self.termination, 
        )
    }
}
