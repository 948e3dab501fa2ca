//! Scalar helpers shared by the geometry types.

use crate::errors::{GeoError, GeoResult, MathErrorKind};

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Arcsine with the argument clamped to [-1, 1].
///
/// Ratios that are mathematically bounded by 1 (such as `z / magnitude`)
/// can land a fraction of an ULP outside the domain after rounding, which
/// would turn into NaN. Clamping keeps the result finite at the poles.
#[inline]
pub fn clamped_asin(x: f64) -> f64 {
    libm::asin(x.clamp(-1.0, 1.0))
}

/// Validates that a value is a finite number, passing it through unchanged.
///
/// `operation` names the quantity being checked and ends up in the error
/// message, e.g. `require_finite("station x_km", x)`.
#[inline]
pub fn require_finite(operation: &str, value: f64) -> GeoResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeoError::math_error(
            operation,
            MathErrorKind::NotFinite,
            &format!("{} is not a finite number", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmod_negative_dividend() {
        // fmod keeps the sign of the dividend, unlike a true modulo
        assert_eq!(fmod(-1.0, 4.0), -1.0);
        assert_eq!(fmod(5.0, 4.0), 1.0);
    }

    #[test]
    fn test_clamped_asin_in_domain() {
        assert_eq!(clamped_asin(0.0), 0.0);
        assert!((clamped_asin(1.0) - crate::constants::HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_clamped_asin_just_outside_domain() {
        let above_one = 1.0 + f64::EPSILON;
        assert!(clamped_asin(above_one).is_finite());
        assert!((clamped_asin(above_one) - crate::constants::HALF_PI).abs() < 1e-15);
        assert!((clamped_asin(-above_one) + crate::constants::HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_require_finite_accepts_numbers() {
        assert_eq!(require_finite("test value", 42.5).unwrap(), 42.5);
        assert_eq!(require_finite("test value", -0.0).unwrap(), -0.0);
    }

    #[test]
    fn test_require_finite_rejects_nan_and_inf() {
        assert!(require_finite("station x_km", f64::NAN).is_err());
        let err = require_finite("station z_km", f64::INFINITY).unwrap_err();
        assert!(err.to_string().contains("station z_km"));
        assert!(err.to_string().contains("NotFinite"));
    }
}
