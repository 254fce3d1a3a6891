//! Sample equations for the command line demo.

/// Sum of the two angles in [`angle_equation`]. 
pub const ANGLE_SUM: f64 = 180.0 - 123.0;

/// `3 cos(x) / sin²(x) - 2 cos(y) / sin²(y)` with `y = ANGLE_SUM - x`.
///
/// Arguments are radians. The function has poles wherever `sin(x)` or 
/// `sin(y)` vanishes, so most wide brackets do not isolate a single root.
pub fn angle_equation(x: f64) -> f64 { 
    let y = ANGLE_SUM - x; 
    3.0 * (x.cos() / x.sin().powi(2)) - 2.0 * (y.cos() / y.sin().powi(2))
}
