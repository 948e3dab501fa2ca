//! Core angle type for geodetic calculations.
//!
//! This module provides [`Angle`], the angular measurement type used throughout
//! the workspace. Angles are stored internally as radians (f64) but can be
//! constructed from and converted to degrees.
//!
//! # Design Rationale
//!
//! **Why radians internally?** Every trigonometric function operates on radians.
//! Storing radians avoids repeated conversions during calculations; the
//! degree-based constructor and accessor exist for human-readable values
//! (geodetic longitude and latitude are conventionally quoted in degrees).
//!
//! **Why associated constants?** [`Angle::PI`], [`Angle::HALF_PI`], and
//! [`Angle::ZERO`] exist because angles are not just numbers. While
//! `std::f64::consts::PI` gives you a raw float, `Angle::PI` gives you a typed
//! angle, which keeps raw radians from silently mixing with degree values.
//!
//! # Quick Start
//!
//! ```
//! use topoframe_core::Angle;
//!
//! let lat = Angle::from_degrees(51.9861);
//! let lon = Angle::from_radians(0.0766);
//!
//! assert!((lat.radians() - 0.90734).abs() < 1e-5);
//! assert!((lon.degrees() - 4.3888).abs() < 1e-3);
//!
//! // Trigonometry without manual conversion
//! let (sin_lat, cos_lat) = lat.sin_cos();
//! assert!(sin_lat > 0.0 && cos_lat > 0.0);
//! ```
//!
//! # Arithmetic
//!
//! Angles support addition, subtraction, negation, and scalar
//! multiplication/division:
//!
//! ```
//! use topoframe_core::Angle;
//!
//! let a = Angle::from_degrees(30.0);
//! let b = Angle::from_degrees(15.0);
//!
//! let sum = a + b;       // 45 degrees
//! let diff = a - b;      // 15 degrees
//! let scaled = a * 2.0;  // 60 degrees
//! let neg = -a;          // -30 degrees
//! ```

use crate::constants::{HALF_PI, PI};

/// An angular measurement stored as radians.
///
/// `Angle` is the primary type for longitudes, latitudes, azimuths, and
/// elevations in this workspace. It stores the angle as a 64-bit float in
/// radians and converts to/from degrees on demand.
///
/// # Derives
///
/// - `Copy`, `Clone`: angles are 8 bytes and cheap to copy
/// - `Debug`: shows the internal radian value
/// - `PartialEq`, `PartialOrd`: compares radian values
///
/// `Eq` and `Ord` are not implemented because f64 can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle (0 radians).
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Pi radians (180 degrees).
    pub const PI: Self = Self { rad: PI };

    /// Pi/2 radians (90 degrees). The colatitude pivot and the zenith elevation.
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// Creates an angle from radians.
    ///
    /// This is the only `const` constructor because radians are the internal
    /// representation.
    ///
    /// ```
    /// use topoframe_core::Angle;
    /// use std::f64::consts::FRAC_PI_4;
    ///
    /// let angle = Angle::from_radians(FRAC_PI_4);
    /// assert!((angle.degrees() - 45.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    ///
    /// ```
    /// use topoframe_core::Angle;
    ///
    /// let angle = Angle::from_degrees(180.0);
    /// assert!((angle.radians() - std::f64::consts::PI).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Returns the angle in radians.
    ///
    /// This is the internal representation, so no conversion occurs.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// Returns the sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.rad.sin()
    }

    /// Returns the cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.rad.cos()
    }

    /// Returns both sine and cosine of the angle.
    ///
    /// Convenience method when you need both values, which is the common
    /// case when building rotation matrices.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    /// Returns the tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.rad.tan()
    }

    /// Returns the absolute value of the angle.
    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    /// Wraps the angle to the range [-pi, +pi) (i.e. [-180, +180) degrees).
    ///
    /// Use this for longitude-like quantities where the discontinuity
    /// belongs at the anti-meridian.
    ///
    /// ```
    /// use topoframe_core::Angle;
    ///
    /// let angle = Angle::from_degrees(270.0);
    /// assert!((angle.wrapped().degrees() + 90.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn wrapped(self) -> Self {
        Self {
            rad: super::normalize::wrap_pm_pi(self.rad),
        }
    }

    /// Normalizes the angle to the range [0, 2*pi) (i.e. [0, 360) degrees).
    ///
    /// Use this for azimuth-like quantities that are conventionally
    /// non-negative.
    ///
    /// ```
    /// use topoframe_core::Angle;
    ///
    /// let angle = Angle::from_degrees(-90.0);
    /// assert!((angle.normalized().degrees() - 270.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            rad: super::normalize::wrap_0_2pi(self.rad),
        }
    }
}

/// Creates an angle from radians. Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}

/// Creates an angle from degrees. Shorthand for [`Angle::from_degrees`].
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}
