pub mod errors;
pub mod frames;
pub mod geodesy;

pub use errors::{FrameError, FrameResult};
pub use frames::{EcefPosition, SezFrame, SezVector};
pub use geodesy::{solve_geodetic, GeodeticSolution};

pub use topoframe_core::{Angle, RotationMatrix3, Vector3};
