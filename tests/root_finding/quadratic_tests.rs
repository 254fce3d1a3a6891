use approx::assert_abs_diff_eq;
use num_complex::Complex64;
use rootlog::root_finding::quadratic::{quadratic_roots, QuadraticRoot};
use rootlog::root_finding::signs::same_sign;

#[test]
fn distinct_real_roots() {
    let [t1, t2] = quadratic_roots(1.0, -3.0, 2.0, 1e-12).expect("a != 0");

    // larger-modulus q first, the companion root from c / q
    assert_eq!(t1, QuadraticRoot::Real(2.0));
    assert_eq!(t2, QuadraticRoot::Real(1.0));
}

#[test]
fn negative_discriminant_gives_conjugate_pair() {
    let [t1, t2] = quadratic_roots(1.0, 0.0, 1.0, 1e-12).expect("a != 0");

    assert!(t1.is_complex() && t2.is_complex());
    assert_eq!(t1.real(), None);
    let (QuadraticRoot::Complex { re: re1, im: im1 }, QuadraticRoot::Complex { re: re2, im: im2 }) = (t1, t2) else {
        panic!("expected complex roots");
    };
    assert_abs_diff_eq!(re1, 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(re2, 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(im1.abs(), 1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(im1, -im2, epsilon = 1e-15);
}

#[test]
fn tiny_imaginary_part_is_coerced_to_real() {
    // (t - 1)² + 1e-8: imaginary parts ~1e-4
    let [t1, t2] = quadratic_roots(1.0, -2.0, 1.0 + 1e-8, 1e-3).expect("a != 0");
    assert!(!t1.is_complex() && !t2.is_complex());
    assert_abs_diff_eq!(t1.real().unwrap_or(f64::NAN), 1.0, epsilon = 1e-6);

    let [t1, _] = quadratic_roots(1.0, -2.0, 1.0 + 1e-8, 1e-6).expect("a != 0");
    assert!(t1.is_complex());
}

#[test]
fn vanishing_a_falls_back_to_the_linear_root() {
    let roots = quadratic_roots(0.0, 2.0, -4.0, 1e-12);
    assert_eq!(roots, Some([QuadraticRoot::Real(2.0), QuadraticRoot::Real(2.0)]));
}

#[test]
fn vanishing_a_and_b_has_no_roots() {
    assert_eq!(quadratic_roots(0.0, 0.0, 1.0, 1e-12), None);
}

#[test]
fn double_root_at_origin() {
    let roots = quadratic_roots(3.0, 0.0, 0.0, 1e-12);
    assert_eq!(roots, Some([QuadraticRoot::Real(0.0), QuadraticRoot::Real(0.0)]));
}

#[test]
fn shifting_moves_only_the_real_part() {
    let z = QuadraticRoot::Complex { re: -1.0, im: 1.0 };
    assert_eq!(z.shifted(2.0), QuadraticRoot::Complex { re: 1.0, im: 1.0 });
    assert_eq!(QuadraticRoot::Real(-3.0).shifted(5.0), QuadraticRoot::Real(2.0));
}

#[test]
fn from_complex_tags_by_imaginary_magnitude() {
    assert_eq!(
        QuadraticRoot::from_complex(Complex64::new(4.0, 1e-9), 1e-6),
        QuadraticRoot::Real(4.0),
    );
    assert!(QuadraticRoot::from_complex(Complex64::new(4.0, 0.5), 1e-6).is_complex());
}

#[test]
fn zero_shares_no_sign() {
    assert!(same_sign(1.0, 2.0));
    assert!(same_sign(-1.0, -0.5));
    assert!(!same_sign(-1.0, 2.0));
    assert!(!same_sign(0.0, 2.0));
    assert!(!same_sign(0.0, 0.0));
}
