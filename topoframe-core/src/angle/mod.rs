mod core;
mod normalize;
mod ops;

pub use core::Angle;
pub use core::{deg, rad};
pub use normalize::{wrap_0_2pi, wrap_pm_pi};
