//! [`RootFinder`] : one place to hold solve parameters and run any method. 
//!
//! The finder is immutable while solving; every call returns its own 
//! [`RootFindingReport`] with a freshly allocated trace, so one finder can be 
//! shared between threads.

use super::algorithms::{Method, DEFAULT_LEFT, DEFAULT_RIGHT};
use super::bisection::{bisection, BisectionCfg};
use super::common::validate_bounds;
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::muller::{muller, MullerCfg, RootSelection};
use super::regula_falsi::{regula_falsi, RegulaFalsiCfg};
use super::report::RootFindingReport;


/// Solve parameters shared by all three methods. 
///
/// # Defaults 
/// ├ bracket    : `[0.1, 56.0]` 
/// ├ tolerance  : `1e-2` 
/// ├ max_iter   : `1000` 
/// ├ sign_check : `true` (bisection and regula falsi) 
/// └ selection  : [`RootSelection::Closest`] (Müller) 
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootFinder { 
    xl:         f64, 
    xr:         f64, 
    common:     CommonCfg, 
    sign_check: bool, 
    selection:  RootSelection, 
}

impl Default for RootFinder { 
    fn default() -> Self { 
        Self { 
            xl         : DEFAULT_LEFT, 
            xr         : DEFAULT_RIGHT, 
            common     : CommonCfg::new(), 
            sign_check : true, 
            selection  : RootSelection::default(), 
        }
    }
}

impl RootFinder { 
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Replaces the starting bracket. 
    ///
    /// # Errors 
    /// └ [`RootFindingError::InvalidBounds`] if an endpoint is NaN/inf or `xl == xr`. 
    pub fn set_bracket(mut self, xl: f64, xr: f64) -> Result<Self, RootFindingError> { 
        validate_bounds(xl, xr)?; 
        self.xl = xl; 
        self.xr = xr; 
        Ok(self)
    }

    pub fn with_sign_check(mut self, v: bool) -> Self { self.sign_check = v; self }
    pub fn with_selection(mut self, v: RootSelection) -> Self { self.selection = v; self }

    #[inline] #[must_use] pub fn bracket(&self) -> (f64, f64) { (self.xl, self.xr) }
    #[inline] #[must_use] pub fn sign_check(&self) -> bool { self.sign_check }
    #[inline] #[must_use] pub fn selection(&self) -> RootSelection { self.selection }

    pub fn bisection<F>(&self, func: F) -> Result<RootFindingReport, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        let cfg = BisectionCfg::from_common(self.common, self.sign_check); 
        bisection(func, self.xl, self.xr, cfg)
    }

    pub fn muller<F>(&self, func: F) -> Result<RootFindingReport, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        let cfg = MullerCfg::from_common(self.common, self.selection); 
        muller(func, self.xl, self.xr, cfg)
    }

    pub fn regula_falsi<F>(&self, func: F) -> Result<RootFindingReport, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        let cfg = RegulaFalsiCfg::from_common(self.common, self.sign_check); 
        regula_falsi(func, self.xl, self.xr, cfg)
    }

    /// Runs `method` with this finder's parameters. 
    pub fn solve<F>(&self, method: Method, func: F) -> Result<RootFindingReport, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        match method { 
            Method::Bisection   => self.bisection(func), 
            Method::Muller      => self.muller(func), 
            Method::RegulaFalsi => self.regula_falsi(func), 
        }
    }
}
impl_common_cfg!(RootFinder);
