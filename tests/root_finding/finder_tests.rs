use rootlog::functions::angle_equation;
use rootlog::root_finding::algorithms::Method;
use rootlog::root_finding::bisection::{bisection, BisectionCfg};
use rootlog::root_finding::errors::{AlgorithmError, ConfigError, RootFindingError};
use rootlog::root_finding::muller::{muller, MullerCfg, RootSelection};
use rootlog::root_finding::regula_falsi::{regula_falsi, RegulaFalsiCfg};
use rootlog::root_finding::RootFinder;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn defaults() {
    let finder = RootFinder::new();

    assert_eq!(finder.bracket(), (0.1, 56.0));
    assert_eq!(finder.tolerance(), 1e-2);
    assert_eq!(finder.max_iter(), 1000);
    assert!(finder.sign_check());
    assert_eq!(finder.selection(), RootSelection::Closest);
    assert_send_sync::<RootFinder>();
}

#[test]
fn solve_dispatches_to_each_method() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let finder = RootFinder::new()
        .set_bracket(0.0, 2.0)?
        .set_tolerance(1e-8)?
        .set_max_iter(200)?;

    let expected = [
        bisection(f, 0.0, 2.0, BisectionCfg::new().set_tolerance(1e-8)?.set_max_iter(200)?)?,
        muller(f, 0.0, 2.0, MullerCfg::new().set_tolerance(1e-8)?.set_max_iter(200)?)?,
        regula_falsi(f, 0.0, 2.0, RegulaFalsiCfg::new().set_tolerance(1e-8)?.set_max_iter(200)?)?,
    ];

    for (method, expected) in Method::ALL.into_iter().zip(expected) {
        let res = finder.solve(method, f)?;
        assert_eq!(res.method, method);
        assert_eq!(res.algorithm_name(), method.algorithm_name());
        assert_eq!(res, expected);
    }
    Ok(())
}

#[test]
fn repeated_solves_are_independent() -> TestResult {
    let finder = RootFinder::new().set_bracket(0.0, 1.0)?;
    let f = |x: f64| x.cos() - x;

    let first  = finder.bisection(f)?;
    let second = finder.bisection(f)?;
    assert_eq!(first.trace, second.trace);
    Ok(())
}

#[test]
fn rejects_invalid_bracket() {
    let err = RootFinder::new().set_bracket(2.0, 2.0).unwrap_err();
    assert_eq!(err, RootFindingError::InvalidBounds { xl: 2.0, xr: 2.0 });

    let err = RootFinder::new().set_bracket(f64::NEG_INFINITY, 2.0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidBounds { .. }));
}

#[test]
fn rejects_invalid_tolerance() {
    let err = RootFinder::new().set_tolerance(-1.0).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTolerance { got: -1.0 });

    let err = RootFinder::new().set_tolerance(f64::NAN).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTolerance { got } if got.is_nan()));
}

#[test]
fn parses_method_tags() {
    assert_eq!("bisection".parse::<Method>(), Ok(Method::Bisection));
    assert_eq!("muller".parse::<Method>(), Ok(Method::Muller));
    assert_eq!("regula".parse::<Method>(), Ok(Method::RegulaFalsi));
    assert_eq!("regula_falsi".parse::<Method>(), Ok(Method::RegulaFalsi));
    assert_eq!(
        "newton".parse::<Method>(),
        Err(AlgorithmError::UnsupportedMethod { tag: "newton".to_string() }),
    );
}

#[test]
fn default_bracket_does_not_bracket_the_angle_equation() {
    let err = RootFinder::new().bisection(angle_equation).unwrap_err();
    assert_eq!(err, RootFindingError::NoSignChange { xl: 0.1, xr: 56.0 });

    let err = RootFinder::new().regula_falsi(angle_equation).unwrap_err();
    assert_eq!(err, RootFindingError::NoSignChange { xl: 0.1, xr: 56.0 });
}
