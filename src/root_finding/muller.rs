use tracing::{debug, info, trace, warn};

use super::algorithms::Method;
use super::common::{validate_bounds, Evaluator};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::quadratic::{quadratic_roots, QuadraticRoot};
use super::report::{MullerRecord, RootFindingReport, Termination, Trace};

const METHOD: Method = Method::Muller;

/// Rule used when both roots of the fitted parabola are real.
/// - [`RootSelection::Closest`]  : root nearest the interpolation point `xm`
///   (the usual Müller choice)
/// - [`RootSelection::Smallest`] : smaller of the two values
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RootSelection {
    #[default]
    Closest,
    Smallest,
}

impl RootSelection {
    /// Picks one of `x1`, `x2`; ties go to `x1`.
    #[inline]
    pub fn pick(self, x1: f64, x2: f64, xm: f64) -> f64 {
        match self {
            RootSelection::Closest  => if (x1 - xm).abs() <= (x2 - xm).abs() { x1 } else { x2 },
            RootSelection::Smallest => x1.min(x2),
        }
    }
}

/// Muller Configuration
///
/// # Fields
/// ├ `common`    : [`CommonCfg`] with `tolerance` and `max_iter`
/// └ `selection` : [`RootSelection`], default [`RootSelection::Closest`]
///
/// # Notes
/// └ `tolerance` bounds the bracket width, the residual `|f(root)|` and
///   the imaginary part below which a root counts as real.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct MullerCfg {
    common:    CommonCfg,
    selection: RootSelection,
}
impl MullerCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub(crate) fn from_common(common: CommonCfg, selection: RootSelection) -> Self {
        Self { common, selection }
    }

    pub fn with_selection(mut self, v: RootSelection) -> Self { self.selection = v; self }

    #[inline] #[must_use] pub fn selection(&self) -> RootSelection { self.selection }
}
impl_common_cfg!(MullerCfg);

/// Coefficients of `a t² + b t + c` with `t = x - xm`.
#[derive(Debug, Copy, Clone)]
struct Parabola {
    a: f64,
    b: f64,
    c: f64,
}

/// Fits the parabola through `(xl, fl)`, `(xm, fm)` and `(xr, fr)` in
/// coordinates shifted to `xm` (`ul = xl - xm`, `ur = xr - xm`):
///
/// ├ `a = ((fr - fm) ul - (fl - fm) ur) / d`
/// ├ `b = ((fl - fm) ur² - (fr - fm) ul²) / d`
/// ├ `c = fm`
/// └ `d = ur² ul - ur ul²`
///
/// # Errors
/// └ [`RootFindingError::DegenerateGeometry`] if `d` is zero or not finite,
///   i.e. two of the three points coincide.
#[inline]
fn fit_parabola(
    (xl, fl): (f64, f64),
    (xm, fm): (f64, f64),
    (xr, fr): (f64, f64),
) -> Result<Parabola, RootFindingError> {
    let ul = xl - xm;
    let ur = xr - xm;
    let d  = ur * ur * ul - ur * ul * ul;

    // d = ul ur (ur - ul) is only small when the points are, so no relative scale here
    if d == 0.0 || !d.is_finite() {
        return Err(RootFindingError::DegenerateGeometry { method: METHOD, denom: d });
    }

    let a = ((fr - fm) * ul - (fl - fm) * ur) / d;
    let b = ((fl - fm) * ur * ur - (fr - fm) * ul * ul) / d;
    Ok(Parabola { a, b, c: fm })
}

/// Keeps `candidate` and the two points of `points` closest to it, in
/// ascending order. The farthest of the four is dropped.
pub(crate) fn closest_three(candidate: f64, points: [f64; 3]) -> [f64; 3] {
    let mut by_distance = points;
    by_distance.sort_by(|p, q| (p - candidate).abs().total_cmp(&(q - candidate).abs()));

    let mut kept = [candidate, by_distance[0], by_distance[1]];
    kept.sort_by(f64::total_cmp);
    kept
}

/// Finds a root of a function using
/// [Müller's method](https://en.wikipedia.org/wiki/Muller%27s_method).
///
/// Each iteration fits a parabola through `xl`, the midpoint `xm` and `xr`,
/// solves it on complex arithmetic and branches on which roots are real:
///
/// ┌ both complex                 -> stop, [`Termination::ComplexRoots`]
/// ├ a real root with |f| < tol   -> collapse `xl = xm = xr = root`, converged
/// ├ exactly one real             -> it is the candidate
/// └ both real                    -> [`RootSelection`] picks the candidate
///
/// The candidate and the two old points closest to it form the next triple;
/// its extremes are the next bracket. The loop runs while `|xl - xr| > tol`.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `xl`   - One end of the starting interval. Finite, distinct from `xr`.
/// ├ `xr`   - Other end of the starting interval.
/// └ `cfg`  - See [`MullerCfg`]. Defaults: tolerance = 1e-2, max_iter = 1000.
///
/// # Returns
///
/// A [`RootFindingReport`] with
/// ├ `root`  : the converged root, or the current `xl` otherwise
/// └ `trace` : one [`MullerRecord`] per iteration, plus the collapsed
///             terminal record when the residual test converges
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBounds`]       - `xl` or `xr` is NaN/inf, or `xl == xr`.
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN or inf.
/// └ [`RootFindingError::DegenerateGeometry`]  - the interpolation points coincide,
///                                               or the fitted parabola is constant.
///
/// # Notes
/// └ No sign change is required; the method only needs three points.
pub fn muller<F>(
    func: F,
    xl: f64,
    xr: f64,
    cfg: MullerCfg
) -> Result<RootFindingReport, RootFindingError>
where F: FnMut(f64) -> f64 {

    validate_bounds(xl, xr)?;

    let tolerance = cfg.tolerance();
    let max_iter  = cfg.max_iter();
    let selection = cfg.selection();

    let (mut xl, mut xr) = (xl.min(xr), xl.max(xr));

    let mut eval       = Evaluator::new(func);
    let mut records    = Vec::new();
    let mut iterations = 0;
    let mut err        = xr - xl;
    let mut hit: Option<(f64, f64)> = None;

    let termination = loop {
        if err <= tolerance {
            debug!(iterations, root = xl, err, "muller converged on width");
            break Termination::Converged;
        }
        if iterations == max_iter {
            warn!(max_iter, err, tolerance, "muller unsuccessful: iteration limit reached");
            break Termination::IterationLimit;
        }
        iterations += 1;

        let xm = 0.5 * (xl + xr);
        let (fl, fm, fr) = (eval.eval(xl)?, eval.eval(xm)?, eval.eval(xr)?);
        let Parabola { a, b, c } = fit_parabola((xl, fl), (xm, fm), (xr, fr))?;

        let [r1, r2] = quadratic_roots(a, b, c, tolerance)
            .ok_or(RootFindingError::DegenerateGeometry { method: METHOD, denom: b })?
            .map(|r| r.shifted(xm));

        let record = MullerRecord { xl, xm, xr, a, b, c, err };

        // residual test on every real root, nearest to xm wins
        for x in [r1, r2].iter().filter_map(QuadraticRoot::real) {
            let fx = eval.eval(x)?;
            let closer = hit.map_or(true, |(h, _)| (x - xm).abs() < (h - xm).abs());
            if fx.abs() < tolerance && closer {
                hit = Some((x, fx));
            }
        }
        if let Some((root, _)) = hit {
            records.push(record);
            records.push(MullerRecord { xl: root, xm: root, xr: root, a, b, c, err: 0.0 });
            debug!(iterations, root, "muller converged on residual");
            break Termination::Converged;
        }

        let candidate = match (r1.real(), r2.real()) {
            (Some(x1), Some(x2))        => selection.pick(x1, x2, xm),
            (Some(x), None)
            | (None, Some(x))           => x,
            (None, None)                => {
                records.push(record);
                info!(iteration = iterations, ?r1, ?r2, "muller stopped by complex roots");
                break Termination::ComplexRoots;
            }
        };

        let [lo, _, hi] = closest_three(candidate, [xl, xm, xr]);
        xl  = lo;
        xr  = hi;
        err = hi - lo;

        records.push(MullerRecord { err, ..record });
        trace!(iteration = iterations, candidate, xl, xr, err, "muller step");
    };

    let (root, f_root) = match hit {
        Some(found) => found,
        None        => (xl, eval.eval(xl)?),
    };

    Ok(RootFindingReport {
        root,
        f_root,
        iterations,
        evals       : eval.evals(),
        termination,
        method      : METHOD,
        trace       : Trace::Muller(records),
    })
}
