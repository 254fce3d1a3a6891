//! Sign utility for the bracketing algorithms.
//!
//! `same_sign` is `true` only when the product is strictly positive, so 
//! zero never shares a sign with anything.

/// Returns `true` if `x * y > 0`.
#[inline]
pub fn same_sign(x: f64, y: f64) -> bool {
    x * y > 0.0
}
