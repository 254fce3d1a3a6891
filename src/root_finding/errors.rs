//! Root-finding error types.  
//! 
//! ┌ [`AlgorithmError`]   : method selection  
//! │  └ unknown method tag
//! │
//! ├ [`ConfigError`]      : configuration setters  
//! │  ├ invalid tolerance  
//! │  └ invalid max_iter  
//! │
//! └ [`RootFindingError`] : runtime errors raised by the solvers  
//!     ├ invalid bracket endpoints  
//!     ├ missing sign change across the bracket  
//!     ├ non-finite function evaluation  
//!     └ degenerate geometry (near-zero denominator)  


use thiserror::Error; 
use super::algorithms::Method; 


/// Method selection errors.  
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgorithmError { 
    #[error("unsupported method `{tag}`: expected one of bisection, muller, regula")]
    UnsupportedMethod { tag: String },
}


/// Configuration errors raised by the validating `set_*` builders.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError { 
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}


/// Root-finding runtime errors.  
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootFindingError {
    #[error("invalid bounds: xl and xr must be finite and distinct. got [{xl}, {xr}]")] 
    InvalidBounds { xl: f64, xr: f64 },

    #[error("no sign change on [{xl}, {xr}]: f(xl) * f(xr) > 0")]
    NoSignChange  { xl: f64, xr: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("degenerate geometry in {method}: denominator {denom} is too small")]
    DegenerateGeometry { method: Method, denom: f64 },
}
