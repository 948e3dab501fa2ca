//! Error types for the math primitives.
//!
//! The primitives in this crate fail in a small number of numeric ways:
//! out-of-range component access, non-finite inputs where finite values are
//! required, and degenerate denominators. All of them are reported through
//! [`GeoError`], with [`MathErrorKind`] distinguishing the failure mode.
//!
//! # Usage
//!
//! Fallible functions return [`GeoResult<T>`], which is `Result<T, GeoError>`.
//! Use the constructor method for consistent error creation:
//!
//! ```
//! use topoframe_core::{GeoError, MathErrorKind};
//!
//! fn checked_reciprocal(x: f64) -> Result<f64, GeoError> {
//!     if x == 0.0 {
//!         return Err(GeoError::math_error(
//!             "checked_reciprocal",
//!             MathErrorKind::DivisionByZero,
//!             "input is zero",
//!         ));
//!     }
//!     Ok(1.0 / x)
//! }
//! ```

use thiserror::Error;

/// Classification of numeric failures.
///
/// Used with [`GeoError::MathError`] to distinguish between different
/// failure modes without multiplying error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Attempted division by zero or near-zero value.
    DivisionByZero,
    /// Input value is invalid for the operation (bad index, wrong domain).
    InvalidInput,
    /// Value is NaN or infinite where a finite number is required.
    NotFinite,
    /// Value outside the valid range (e.g. latitude beyond a pole).
    OutOfRange,
}

/// Error type for numeric primitive operations.
///
/// Use [`math_error`](Self::math_error) rather than constructing the
/// variant directly; it keeps the operation/kind/message shape consistent
/// across the crate.
#[derive(Error, Debug)]
pub enum GeoError {
    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, GeoError>`.
pub type GeoResult<T> = Result<T, GeoError>;

impl GeoError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns the failure classification.
    pub fn kind(&self) -> &MathErrorKind {
        match self {
            Self::MathError { kind, .. } => kind,
        }
    }
}
