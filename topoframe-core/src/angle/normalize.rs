//! Angle normalization for geodetic quantities.
//!
//! Different quantities want different angular ranges:
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Azimuth | [0, 2pi) | [`wrap_0_2pi`] |
//! | Longitude | [-pi, +pi) | [`wrap_pm_pi`] |
//!
//! **Wrapping** preserves the direction: a longitude of 190 degrees east is
//! the same meridian as 170 degrees west, so [`wrap_pm_pi`] returns -170.
//! Azimuth is conventionally non-negative (north = 0, east = 90), so
//! [`wrap_0_2pi`] maps negative values up into [0, 360).
//!
//! # Algorithm Notes
//!
//! Both functions use `libm::fmod` (via [`crate::math::fmod`]) rather than
//! the `%` operator because Rust's `%` is a remainder, not a modulo. After
//! `fmod`, a single adjustment brings the value into the target range.

use crate::constants::{PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [-pi, +pi) radians.
///
/// Use for longitudes and longitude differences, where the discontinuity
/// belongs at the anti-meridian rather than at the prime meridian.
///
/// ```
/// use topoframe_core::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// // 270 degrees -> -90 degrees
/// let x = wrap_pm_pi(3.0 * PI / 2.0);
/// assert!((x - (-PI / 2.0)).abs() < 1e-10);
///
/// // -270 degrees -> +90 degrees
/// let y = wrap_pm_pi(-3.0 * PI / 2.0);
/// assert!((y - (PI / 2.0)).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w.abs() >= PI {
        return w - TWOPI.copysign(x);
    }

    w
}

/// Wraps an angle to [0, 2pi) radians.
///
/// Use for azimuths, which run north through east and never go negative.
///
/// ```
/// use topoframe_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// // Negative angle -> positive equivalent
/// let x = wrap_0_2pi(-PI / 2.0); // -90 deg -> 270 deg
/// assert!((x - 3.0 * PI / 2.0).abs() < 1e-10);
///
/// // Angle > 2pi -> reduced
/// let y = wrap_0_2pi(5.0 * PI); // 900 deg -> 180 deg
/// assert!((y - PI).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_wrap_pm_pi_in_range_unchanged() {
        assert_eq!(wrap_pm_pi(1.0), 1.0);
        assert_eq!(wrap_pm_pi(-1.0), -1.0);
        assert_eq!(wrap_pm_pi(0.0), 0.0);
    }

    #[test]
    fn test_wrap_pm_pi_wraps_past_antimeridian() {
        assert!((wrap_pm_pi(3.0 * HALF_PI) + HALF_PI).abs() < 1e-15);
        assert!((wrap_pm_pi(-3.0 * HALF_PI) - HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_wrap_0_2pi_negative_azimuth() {
        assert!((wrap_0_2pi(-HALF_PI) - 3.0 * HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_wrap_0_2pi_multiple_turns() {
        assert!((wrap_0_2pi(5.0 * PI) - PI).abs() < 1e-10);
        assert!((wrap_0_2pi(-5.0 * PI) - PI).abs() < 1e-10);
    }

    #[test]
    fn test_wrap_0_2pi_in_range_unchanged() {
        assert_eq!(wrap_0_2pi(1.0), 1.0);
        assert_eq!(wrap_0_2pi(0.0), 0.0);
    }
}
