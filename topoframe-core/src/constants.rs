/// Earth equatorial radius in kilometers (JGM-3 value).
pub const EARTH_SEMI_MAJOR_AXIS_KM: f64 = 6378.1363;

/// Earth first eccentricity: e = sqrt((a² - b²) / a²).
#[allow(clippy::excessive_precision)]
pub const EARTH_ECCENTRICITY: f64 = 0.081819221456;

/// Earth first eccentricity squared, derived from [`EARTH_ECCENTRICITY`].
pub const EARTH_ECCENTRICITY_SQUARED: f64 = EARTH_ECCENTRICITY * EARTH_ECCENTRICITY;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;
