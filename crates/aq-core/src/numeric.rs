use crate::AqError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, AqError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AqError::NonFinite { what, value: v })
    }
}

/// Ensure `v` is finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, AqError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(AqError::InvalidArg { what })
    }
}

/// Evaluate `c[0] + c[1] x + c[2] x² + ...` with Horner's scheme.
pub fn polyval(coeffs: &[Real], x: Real) -> Real {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Central finite difference of `f` at `x` with step `h`.
pub fn central_difference<F: Fn(Real) -> Real>(f: F, x: Real, h: Real) -> Real {
    (f(x + h) - f(x - h)) / (2.0 * h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert!(ensure_positive(1.0, "radius").is_ok());
        assert!(ensure_positive(0.0, "radius").is_err());
        assert!(ensure_positive(-2.0, "radius").is_err());
    }

    #[test]
    fn polyval_matches_expanded_form() {
        let c = [1.0, -2.0, 0.5, 3.0];
        let x = 1.7;
        let expanded = 1.0 - 2.0 * x + 0.5 * x * x + 3.0 * x * x * x;
        assert!((polyval(&c, x) - expanded).abs() < 1e-12);
        assert_eq!(polyval(&[], x), 0.0);
    }

    #[test]
    fn central_difference_of_cubic() {
        let d = central_difference(|x| x * x * x, 2.0, 1e-4);
        assert!((d - 12.0).abs() < 1e-6);
    }
}
