use thiserror::Error;
use topoframe_core::GeoError;

pub type FrameResult<T> = Result<T, FrameError>;

#[derive(Debug, Error)]
pub enum FrameError {
    /// Station geometry that has no defined geodetic longitude or latitude:
    /// the coordinate origin and the polar axis.
    #[error("Singular station position: {message}")]
    SingularStation { message: String },

    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error("Numeric primitive failed: {source}")]
    Math {
        #[from]
        source: GeoError,
    },
}

impl FrameError {
    pub fn singular_station(message: impl Into<String>) -> Self {
        Self::SingularStation {
            message: message.into(),
        }
    }

    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }
}
