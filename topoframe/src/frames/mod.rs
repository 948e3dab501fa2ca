mod ecef;
mod sez;

pub use ecef::EcefPosition;
pub use sez::{SezFrame, SezVector};
