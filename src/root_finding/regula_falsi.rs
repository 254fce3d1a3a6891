use tracing::{debug, trace, warn};

use super::algorithms::Method;
use super::common::{is_negligible, validate_bounds, Evaluator};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::report::{RegulaFalsiRecord, RootFindingReport, Termination, Trace};
use super::signs::same_sign;

const METHOD: Method = Method::RegulaFalsi;

/// RegulaFalsi Configuration
///
/// # Fields
/// ├ `common`     : [`CommonCfg`] with `tolerance` and `max_iter`
/// └ `sign_check` : reject brackets where `f(xl) * f(xr) > 0` (default `true`)
///
/// # Notes:
/// └ With the sign check disabled, a non-bracketing interval usually ends in
///   [`Termination::DegenerateBracket`] on the first iteration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegulaFalsiCfg {
    common:     CommonCfg,
    sign_check: bool,
}
impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub(crate) fn from_common(common: CommonCfg, sign_check: bool) -> Self {
        Self { common, sign_check }
    }

    pub fn with_sign_check(mut self, v: bool) -> Self { self.sign_check = v; self }

    #[inline] #[must_use] pub fn sign_check(&self) -> bool { self.sign_check }
}
impl_common_cfg!(RegulaFalsiCfg);

impl Default for RegulaFalsiCfg {
    fn default() -> Self {
        Self { common: CommonCfg::new(), sign_check: true }
    }
}

/// Calculates the secant intersection point for the line
/// connecting `(xl, fl)` and `(xr, fr)`
///
/// # Returns
/// ├ `Ok(x_secant)` if denominator `fr - fl` is well-scaled
/// └ `Err(DegenerateGeometry)` if denominator is too small.
#[inline]
fn false_position(
    (xl, fl): (f64, f64),
    (xr, fr): (f64, f64),
) -> Result<f64, RootFindingError> {
    let denom = fr - fl;
    let scale = fl.abs().max(fr.abs());

    if is_negligible(denom, scale) {
        return Err(RootFindingError::DegenerateGeometry { method: METHOD, denom });
    }

    Ok((xl * fr - xr * fl) / denom)
}

/// Finds a root of a function using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Each iteration intersects the chord through `(xl, f(xl))` and
/// `(xr, f(xr))` with the axis at `x'`:
/// ├ `f(x')` and `f(xr)` differ in sign -> `xl = x'`
/// ├ `f(x')` and `f(xl)` differ in sign -> `xr = x'`
/// └ otherwise the bracket has degenerated; stop without a record.
///
/// `f(x') == 0` is an exact hit: the bracket collapses onto `x'`.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `xl`   - Left endpoint. Finite, distinct from `xr`.
/// ├ `xr`   - Right endpoint. Finite, distinct from `xl`.
/// └ `cfg`  - See [`RegulaFalsiCfg`]. Defaults: tolerance = 1e-2, max_iter = 1000.
///
/// # Returns
///
/// A [`RootFindingReport`] whose `root` is the final `xl`, terminated by
/// ├ [`Termination::Converged`]         : width within tolerance, or an exact hit
/// ├ [`Termination::IterationLimit`]    : `max_iter` reached
/// └ [`Termination::DegenerateBracket`] : no sign change around `x'`
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBounds`]       - `xl` or `xr` is NaN/inf, or `xl == xr`.
/// ├ [`RootFindingError::NoSignChange`]        - sign check on and `f(xl) * f(xr) > 0`.
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN or inf.
/// └ [`RootFindingError::DegenerateGeometry`]  - `f(xr) - f(xl)` ~ 0.
///
/// # Warning
/// └ Pure false position keeps one endpoint fixed on convex/concave functions,
///   so the width may never reach the tolerance. The loop then runs to
///   `max_iter` while the moving endpoint closes in on the root.
pub fn regula_falsi<F>(
    func: F,
    mut xl: f64,
    mut xr: f64,
    cfg: RegulaFalsiCfg
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
            debug!(iterations, root = xl, err, "regula falsi converged");
            break Termination::Converged;
        }
        if iterations == max_iter {
            warn!(max_iter, err, tolerance, "regula falsi unsuccessful: iteration limit reached");
            break Termination::IterationLimit;
        }

        let x_new = false_position((xl, fl), (xr, fr))?;
        let f_new = eval.eval(x_new)?;
        let (xl0, xr0, fl0, fr0) = (xl, xr, fl, fr);

        if f_new == 0.0 {
            xl = x_new;
            xr = x_new;
            fl = f_new;
            fr = f_new;
        } else if !same_sign(f_new, fr) {
            xl = x_new;
            fl = f_new;
        } else if !same_sign(f_new, fl) {
            xr = x_new;
            fr = f_new;
        } else {
            warn!(
                xl, xr, x_new, f_new,
                "regula falsi stopped: false position does not split the bracket"
            );
            break Termination::DegenerateBracket;
        }

        iterations += 1;
        err = (xl - xr).abs();

        records.push(RegulaFalsiRecord {
            xl   : xl0,
            xr   : xr0,
            f_xl : fl0,
            f_xr : fr0,
            err,
        });
        trace!(iteration = iterations, xl, xr, err, "regula falsi step");
    };

    Ok(RootFindingReport {
        root        : xl,
        f_root      : fl,
        iterations,
        evals       : eval.evals(),
        termination,
        method      : METHOD,
        trace       : Trace::RegulaFalsi(records),
    })
}
