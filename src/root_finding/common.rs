//! Helpers shared by the solvers. 
//!
//! ┌ [`Evaluator`]        : counts evaluations and rejects non-finite values 
//! ├ [`validate_bounds`]  : endpoints must be finite and distinct 
//! └ [`is_negligible`]    : near-zero denominator test 

use super::errors::RootFindingError;


/// Wraps the caller's function. Every value is checked for finiteness 
/// and every call is counted for the report. 
pub(crate) struct Evaluator<F> { 
    func:  F, 
    evals: usize, 
}

impl<F> Evaluator<F> 
where F: FnMut(f64) -> f64 { 
    pub(crate) fn new(func: F) -> Self { 
        Self { func, evals: 0 }
    }

    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, RootFindingError> { 
        self.evals += 1; 
        let fx = (self.func)(x); 
        if !fx.is_finite() { 
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }); 
        }
        Ok(fx)
    }

    pub(crate) fn evals(&self) -> usize { 
        self.evals
    }
}


/// Checks that both endpoints are finite and distinct. The order is free; 
/// every method works on `|xl - xr|`. 
pub(crate) fn validate_bounds(xl: f64, xr: f64) -> Result<(), RootFindingError> { 
    if !(xl.is_finite() && xr.is_finite()) || xl == xr { 
        return Err(RootFindingError::InvalidBounds { xl, xr }); 
    }
    Ok(())
}


/// `true` if `denom` is indistinguishable from zero relative to `scale` 
/// (floored at 1.0), or is not finite. 
#[inline]
pub(crate) fn is_negligible(denom: f64, scale: f64) -> bool { 
    let thresh = f64::EPSILON * scale.abs().max(1.0) + f64::MIN_POSITIVE; 
    !denom.is_finite() || denom.abs() <= thresh
}
