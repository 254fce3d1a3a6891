//! Quadratic roots on complex arithmetic.
//!
//! [`quadratic_roots`] solves `a t² + b t + c = 0` with a complex square root, 
//! so a negative discriminant yields a conjugate pair instead of a NaN. 
//! Each root is tagged as [`QuadraticRoot::Real`] or [`QuadraticRoot::Complex`]; 
//! callers branch on the tag.

use num_complex::Complex64;


/// A root of a quadratic, either real or genuinely complex.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum QuadraticRoot { 
    Real(f64), 
    Complex { re: f64, im: f64 }, 
}

impl QuadraticRoot { 
    /// Tags `z`, coercing it to [`QuadraticRoot::Real`] when `|Im z| <= imag_tol`. 
    pub fn from_complex(z: Complex64, imag_tol: f64) -> Self { 
        if z.im.abs() <= imag_tol { 
            QuadraticRoot::Real(z.re)
        } else { 
            QuadraticRoot::Complex { re: z.re, im: z.im }
        }
    }

    /// The real value, or `None` for a complex root.
    #[inline]
    pub fn real(&self) -> Option<f64> { 
        match *self { 
            QuadraticRoot::Real(x)         => Some(x), 
            QuadraticRoot::Complex { .. }  => None, 
        }
    }

    #[inline]
    pub fn is_complex(&self) -> bool { 
        matches!(self, QuadraticRoot::Complex { .. })
    }

    /// Translates the root along the real axis by `offset`. 
    #[inline]
    pub fn shifted(self, offset: f64) -> Self { 
        match self { 
            QuadraticRoot::Real(x)            => QuadraticRoot::Real(x + offset), 
            QuadraticRoot::Complex { re, im } => QuadraticRoot::Complex { re: re + offset, im }, 
        }
    }
}


/// Both roots of `a t² + b t + c = 0`.
///
/// # Arguments 
/// ├ `a`, `b`, `c` - polynomial coefficients 
/// └ `imag_tol`    - imaginary parts up to this magnitude are dropped 
///
/// # Returns 
/// ├ `Some([t1, t2])` - `t1` takes `+√D` when `b >= 0`, `-√D` otherwise 
/// │                    (the sign that avoids cancellation), `t2 = c / (a t1)` 
/// ├ `Some([t, t])`   - linear case, when `|a| <= ε |b|` 
/// └ `None`           - both `a` and `b` vanish; there is nothing to solve 
pub fn quadratic_roots(a: f64, b: f64, c: f64, imag_tol: f64) -> Option<[QuadraticRoot; 2]> { 
    if a.abs() <= f64::EPSILON * b.abs() { 
        if b == 0.0 { 
            return None; 
        }
        let t = QuadraticRoot::Real(-c / b); 
        return Some([t, t]); 
    }

    let disc = Complex64::new(b * b - 4.0 * a * c, 0.0).sqrt(); 
    let b    = Complex64::new(b, 0.0); 

    // q = -(b ± √D) / 2, picking the sign with the larger modulus
    let q = if (b + disc).norm() >= (b - disc).norm() { 
        -(b + disc) * 0.5 
    } else { 
        -(b - disc) * 0.5 
    };

    if q.norm() == 0.0 { 
        // b = 0 and D = 0 force c = 0: double root at the origin 
        let t = QuadraticRoot::Real(0.0); 
        return Some([t, t]); 
    }

    let t1 = q / a; 
    let t2 = Complex64::new(c, 0.0) / q; 
    Some([
        QuadraticRoot::from_complex(t1, imag_tol), 
        QuadraticRoot::from_complex(t2, imag_tol), 
    ])
}
