use tracing::{debug, trace, warn};

use super::algorithms::Method;
use super::common::{validate_bounds, Evaluator};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::report::{BisectionRecord, RootFindingReport, Termination, Trace};
use super::signs::same_sign;

const METHOD: Method = Method::Bisection;

/// Bisection Configuration
///
/// # Fields
/// ├ `common`     : [`CommonCfg`] with `tolerance` and `max_iter`
/// └ `sign_check` : reject brackets where `f(xl) * f(xr) > 0` (default `true`)
///
/// # Construction
/// └ Use [`BisectionCfg::new`] then optional setters.
///
/// # Validation:
/// ├ `tolerance` >  0 and finite, checked by `set_tolerance`
/// └ `max_iter`  >= 1, checked by `set_max_iter`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    common:     CommonCfg,
    sign_check: bool,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub(crate) fn from_common(common: CommonCfg, sign_check: bool) -> Self {
        Self { common, sign_check }
    }

    /// Disabling the check reproduces the permissive behavior: a bracket
    /// without a sign change runs until the width tolerance or `max_iter`.
    pub fn with_sign_check(mut self, v: bool) -> Self { self.sign_check = v; self }

    #[inline] #[must_use] pub fn sign_check(&self) -> bool { self.sign_check }
}
impl_common_cfg!(BisectionCfg);

impl Default for BisectionCfg {
    fn default() -> Self {
        Self { common: CommonCfg::new(), sign_check: true }
    }
}

/// Calculates midpoint of [xl, xr]
#[inline]
fn midpoint(xl: f64, xr: f64) -> f64 {
    (xl + xr) / 2.0
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Each iteration evaluates the midpoint `m`; if `f(xl)` and `f(m)` share a
/// sign, `xl` moves to `m`, otherwise `xr` does. The loop runs while
/// `|xl - xr| > tolerance`.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `xl`   - Left endpoint. Finite, distinct from `xr`.
/// ├ `xr`   - Right endpoint. Finite, distinct from `xl`.
/// └ `cfg`  - See [`BisectionCfg`]. Defaults: tolerance = 1e-2, max_iter = 1000.
///
/// # Returns
///
/// A [`RootFindingReport`] with
/// ├ `root`        : the final `xl`, whichever way the loop ended
/// ├ `termination` : [`Termination::Converged`] or [`Termination::IterationLimit`]
/// └ `trace`       : one [`BisectionRecord`] per iteration
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBounds`]       - `xl` or `xr` is NaN/inf, or `xl == xr`.
/// ├ [`RootFindingError::NoSignChange`]        - sign check on and `f(xl) * f(xr) > 0`.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN or inf.
///
/// # Notes
/// ├ Endpoint values are cached, so an iteration costs one evaluation.
/// └ A zero `f(m)` is not special-cased: `same_sign` is false for zero, so
///   `xr` moves onto the root and the bracket keeps closing around it.
pub fn bisection<F>(
    func: F,
    mut xl: f64,
    mut xr: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, RootFindingError>
where F: FnMut(f64) -> f64 {

    validate_bounds(xl, xr)?;

    let tolerance = cfg.tolerance();
    let max_iter  = cfg.max_iter();

    let mut eval = Evaluator::new(func);
    let mut fl   = eval.eval(xl)?;
    let mut fr   = eval.eval(xr)?;

    if cfg.sign_check() && same_sign(fl, fr) {
        return Err(RootFindingError::NoSignChange { xl, xr });
    }

    let mut records    = Vec::new();
    let mut iterations = 0;
    let mut err        = (xl - xr).abs();

    let termination = loop {
        if err <= tolerance {
            debug!(iterations, root = xl, err, "bisection converged");
            break Termination::Converged;
        }
        if iterations == max_iter {
            warn!(max_iter, err, tolerance, "bisection unsuccessful: iteration limit reached");
            break Termination::IterationLimit;
        }
        iterations += 1;

        let x_mid = midpoint(xl, xr);
        let f_mid = eval.eval(x_mid)?;
        let (xl0, xr0, fl0, fr0) = (xl, xr, fl, fr);

        // shrink interval
        if same_sign(fl, f_mid) {
            xl = x_mid;
            fl = f_mid;
        } else {
            xr = x_mid;
            fr = f_mid;
        }
        err = (xl - xr).abs();

        records.push(BisectionRecord {
            xl    : xl0,
            xr    : xr0,
            f_xl  : fl0,
            f_xr  : fr0,
            x_mid,
            f_mid,
            err,
        });
        trace!(iteration = iterations, xl, xr, err, "bisection step");
    };

    Ok(RootFindingReport {
        root        : xl,
        f_root      : fl,
        iterations,
        evals       : eval.evals(),
        termination,
        method      : METHOD,
        trace       : Trace::Bisection(records),
    })
}
