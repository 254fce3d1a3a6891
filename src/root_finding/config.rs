//! Shared configuration for root-finding algorithms.  
//! 
//! Provides [`CommonCfg`] with the default tolerance and iteration limit, 
//! used by all root-finding configs.
//!
//! [`CommonCfg`] : universal fields  
//! ├ `tolerance` : interval-width / residual tolerance  
//! └ `max_iter`  : iteration cap  
//!
//! Some algorithms have additional config arguments (e.g. the sign check 
//! of the bracketing methods, or the root selection rule of Müller's method). 

use super::algorithms::{DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tolerance: f64,
    max_iter:  usize,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self { 
            tolerance : DEFAULT_TOLERANCE, 
            max_iter  : DEFAULT_MAX_ITER, 
        }
    }

    // getters  
    pub fn tolerance(&self) -> f64   { self.tolerance }
    pub fn max_iter(&self)  -> usize { self.max_iter }

    // setters (internal) 
    pub(crate) fn with_tolerance(&mut self, v: f64)   { self.tolerance = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter  = v; }
}

impl Default for CommonCfg { 
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tolerance(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidTolerance { got: v }
                    );
                }
                self.common.with_tolerance(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn tolerance(&self) -> f64   { self.common.tolerance() }
            #[inline] #[must_use] pub fn max_iter (&self) -> usize { self.common.max_iter() }
        }
    };
}
pub(crate) use impl_common_cfg; 
