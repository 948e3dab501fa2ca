//! Math primitives for topocentric coordinate work.
//!
//! `topoframe-core` provides the building blocks the frame-transformation
//! layer is assembled from: typed angles, 3D vectors, 3x3 rotation matrices,
//! reference ellipsoid constants, and a unified numeric error type. It is
//! pure Rust with no runtime FFI.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] type, degree/radian conversion, normalization |
//! | [`matrix`] | 3x3 rotation matrices and 3D vectors |
//! | [`constants`] | Reference ellipsoid and unit-conversion constants |
//! | [`math`] | Scalar helpers (fmod, clamped arcsine, finiteness checks) |
//! | [`errors`] | [`GeoError`] and [`GeoResult`] |
//!
//! # Building a Frame Rotation
//!
//! The Earth-fixed to station-local rotation is two passive axis rotations,
//! longitude about Z and colatitude about Y:
//!
//! ```
//! use topoframe_core::{Angle, RotationMatrix3, Vector3};
//!
//! let lon = Angle::from_degrees(4.39);
//! let lat = Angle::from_degrees(51.99);
//!
//! let mut rotation = RotationMatrix3::identity();
//! rotation.rotate_z(lon.radians());
//! rotation.rotate_y(Angle::HALF_PI.radians() - lat.radians());
//!
//! let displacement_km = Vector3::new(10.0, -3.0, 2.0);
//! let local = rotation * displacement_km;
//! assert!((local.magnitude() - displacement_km.magnitude()).abs() < 1e-12);
//! ```
//!
//! # Re-exports
//!
//! Common types are re-exported at the crate root:
//!
//! ```
//! use topoframe_core::{Angle, Vector3, RotationMatrix3};
//! use topoframe_core::{GeoError, GeoResult, MathErrorKind};
//! ```
//!
//! # Design Notes
//!
//! - **Radians internally**: all angular computation uses radians; the
//!   [`Angle`] type converts to degrees only at the display boundary.
//! - **Kilometers throughout**: position and displacement vectors carry
//!   kilometers, matching the reference ellipsoid constants.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;

pub use angle::Angle;
pub use errors::{GeoError, GeoResult, MathErrorKind};
pub use matrix::{RotationMatrix3, Vector3};

pub mod test_helpers;
