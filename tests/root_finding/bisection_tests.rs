//! tests for the bisection root finding algorithm
use approx::assert_relative_eq;
use rstest::rstest;
use rootlog::root_finding::bisection::{bisection, BisectionCfg};
use rootlog::root_finding::errors::{ConfigError, RootFindingError};
use rootlog::root_finding::report::{Termination, Trace};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn cfg(tol: f64, max_iter: usize) -> Result<BisectionCfg, ConfigError> {
    BisectionCfg::new().set_tolerance(tol)?.set_max_iter(max_iter)
}

#[test]
fn finds_5_within_24_iterations() -> TestResult {
    let f   = |x: f64| x - 5.0;
    let tol = 1e-6;
    let res = bisection(f, 0.0, 10.0, cfg(tol, 1000)?)?;

    assert_eq!(res.termination, Termination::Converged);
    assert!(res.converged());
    assert!((res.root - 5.0).abs() <= tol);
    assert!(res.iterations <= 24);
    assert_eq!(res.trace.len(), res.iterations);
    Ok(())
}

#[test]
fn first_record_holds_starting_bracket() -> TestResult {
    let f   = |x: f64| x - 5.0;
    let res = bisection(f, 0.0, 10.0, cfg(1e-6, 1000)?)?;

    let Trace::Bisection(records) = &res.trace else {
        panic!("expected a bisection trace");
    };
    let first = records[0];
    assert_eq!((first.xl, first.xr), (0.0, 10.0));
    assert_eq!((first.f_xl, first.f_xr), (-5.0, 5.0));
    assert_eq!((first.x_mid, first.f_mid), (5.0, 0.0));
    // zero is never the same sign, so xr moved onto the midpoint
    assert_eq!(first.err, 5.0);
    assert_eq!(records[1].xr, 5.0);
    Ok(())
}

#[test]
fn width_halves_every_iteration() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = bisection(f, 0.0, 2.0, cfg(1e-9, 1000)?)?;
    let widths = res.trace.errors();

    assert_relative_eq!(widths[0], 1.0);
    for w in widths.windows(2) {
        assert!(w[1] < w[0]);
        assert_relative_eq!(w[1], 0.5 * w[0], max_relative = 1e-12);
    }
    assert!((res.root - 2.0_f64.sqrt()).abs() <= 1e-9);
    Ok(())
}

#[test]
fn is_deterministic() -> TestResult {
    let f = |x: f64| x.cos() - x;
    let first  = bisection(f, 0.0, 1.0, cfg(1e-10, 1000)?)?;
    let second = bisection(f, 0.0, 1.0, cfg(1e-10, 1000)?)?;

    assert_eq!(first.root, second.root);
    assert_eq!(first.trace, second.trace);
    Ok(())
}

#[test]
fn returns_last_left_endpoint() -> TestResult {
    let f   = |x: f64| x - 5.0;
    let res = bisection(f, 0.0, 10.0, cfg(1e-3, 1000)?)?;

    let Trace::Bisection(records) = &res.trace else {
        panic!("expected a bisection trace");
    };
    let last = records[records.len() - 1];
    let expected_xl = if last.f_xl * last.f_mid > 0.0 { last.x_mid } else { last.xl };
    assert_eq!(res.root, expected_xl);
    assert!(res.root <= 5.0);
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let err = bisection(f, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert_eq!(err, RootFindingError::NoSignChange { xl: -1.0, xr: 1.0 });
    Ok(())
}

#[test]
fn sign_check_disabled_runs_permissively() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let cfg = cfg(1e-3, 1000)?.with_sign_check(false);
    let res = bisection(f, -1.0, 1.0, cfg)?;

    // the width still shrinks, the estimate is meaningless
    assert_eq!(res.termination, Termination::Converged);
    assert!(!res.trace.is_empty());
    assert!(res.f_root > 0.0);
    Ok(())
}

#[test]
fn uses_max_iter() -> TestResult {
    let f     = |x: f64| x;
    let niter = 10;
    let res   = bisection(f, -3.0, 2.0, cfg(1e-12, niter)?)?;

    assert_eq!(res.termination, Termination::IterationLimit);
    assert!(!res.converged());
    assert_eq!(res.iterations, niter);
    assert_eq!(res.trace.len(), niter);
    Ok(())
}

#[test]
fn already_narrow_bracket_runs_no_iterations() -> TestResult {
    let f   = |x: f64| x - 1.0005;
    let res = bisection(f, 1.0, 1.001, BisectionCfg::new())?;

    assert_eq!(res.termination, Termination::Converged);
    assert_eq!(res.iterations, 0);
    assert!(res.trace.is_empty());
    assert_eq!(res.root, 1.0);
    Ok(())
}

#[test]
fn counts_one_evaluation_per_iteration() -> TestResult {
    let f   = |x: f64| x - 5.0;
    let res = bisection(f, 0.0, 10.0, cfg(1e-2, 1000)?)?;

    assert_eq!(res.evals, res.iterations + 2);
    Ok(())
}

#[rstest]
#[case(1.0, 1.0)]
#[case(f64::NAN, 1.0)]
#[case(0.0, f64::INFINITY)]
fn detects_invalid_bounds(#[case] xl: f64, #[case] xr: f64) {
    let err = bisection(|x: f64| x, xl, xr, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidBounds { .. }));
}

#[test]
fn infinite_function_value() -> TestResult {
    let f   = |x: f64| 1.0 / x;
    let err = bisection(f, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::NonFiniteEvaluation { x, fx }
        if x == 0.0 && fx.is_infinite()));
    Ok(())
}

#[test]
fn rejects_invalid_config() {
    assert_eq!(
        BisectionCfg::new().set_tolerance(0.0).unwrap_err(),
        ConfigError::InvalidTolerance { got: 0.0 },
    );
    assert_eq!(
        BisectionCfg::new().set_max_iter(0).unwrap_err(),
        ConfigError::InvalidMaxIter { got: 0 },
    );
}

#[rstest]
#[case::sqrt_2(|x: f64| x * x - 2.0, 0.0, 2.0, 2.0_f64.sqrt())]
#[case::negative_5(|x: f64| x + 5.0, -10.0, 0.0, -5.0)]
#[case::reversed_bracket(|x: f64| x - 3.0, 10.0, 0.0, 3.0)]
#[case::flat_cubic(|x: f64| (x - 1.0).powi(3), -2.0, 2.0, 1.0)]
fn converges_on(
    #[case] f: fn(f64) -> f64,
    #[case] xl: f64,
    #[case] xr: f64,
    #[case] root: f64,
) -> TestResult {
    let tol = 1e-8;
    let res = bisection(f, xl, xr, cfg(tol, 1000)?)?;

    assert_eq!(res.termination, Termination::Converged);
    assert!((res.root - root).abs() <= tol, "root={} expected={root}", res.root);
    assert!(res.trace.len() <= 1000 + 1);
    Ok(())
}
