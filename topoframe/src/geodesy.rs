//! Geodetic latitude solver.
//!
//! An ECEF station position fixes its longitude directly (`atan2(y, x)`),
//! but geodetic latitude on an oblate ellipsoid has no closed form in that
//! direction. The solver starts from the geocentric latitude and runs a
//! bounded fixed-point iteration: each pass recomputes the prime-vertical
//! radius of curvature at the current latitude estimate and feeds it back
//! into the latitude update. The iteration is strongly contractive (the
//! update shrinks the error by roughly the ellipsoid's e² per pass), so
//! realistic stations settle in two or three passes.
//!
//! The iteration cap is deliberate policy, not an error path: after
//! [`MAX_ITERATIONS`] passes the last estimate is used as-is, and the
//! [`GeodeticSolution`] records how the loop ended via
//! [`iterations`](GeodeticSolution::iterations) and
//! [`converged`](GeodeticSolution::converged).

use crate::errors::{FrameError, FrameResult};
use crate::frames::EcefPosition;
use topoframe_core::constants::{EARTH_ECCENTRICITY_SQUARED, EARTH_SEMI_MAJOR_AXIS_KM};
use topoframe_core::math::{clamped_asin, require_finite};
use topoframe_core::Angle;

/// Maximum fixed-point passes before the solver stops refining.
pub const MAX_ITERATIONS: u32 = 5;

/// Convergence threshold on the change in latitude between passes, radians.
pub const LATITUDE_TOLERANCE_RAD: f64 = 1e-6;

/// Geodetic description of a station, derived from its ECEF position.
///
/// Produced by [`solve_geodetic`] (or [`EcefPosition::to_geodetic`]).
/// Immutable once solved; the intermediate quantities the transform needs
/// later (equatorial distance, prime-vertical radius) are kept alongside
/// the angles so callers never recompute them.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct GeodeticSolution {
    longitude: Angle,
    latitude: Angle,
    equatorial_distance_km: f64,
    prime_vertical_radius_km: f64,
    height_km: f64,
    iterations: u32,
    converged: bool,
}

impl GeodeticSolution {
    /// Geodetic longitude, in [-pi, pi].
    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    /// Geodetic latitude, in (-pi/2, pi/2).
    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    /// Distance from the polar axis, `sqrt(x² + y²)`, in kilometers.
    pub fn equatorial_distance_km(&self) -> f64 {
        self.equatorial_distance_km
    }

    /// Prime-vertical radius of curvature at the solved latitude, kilometers.
    pub fn prime_vertical_radius_km(&self) -> f64 {
        self.prime_vertical_radius_km
    }

    /// Height above the reference ellipsoid, kilometers.
    pub fn height_km(&self) -> f64 {
        self.height_km
    }

    /// Number of fixed-point passes the solver ran (at least 1).
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Whether the last pass moved the latitude by no more than
    /// [`LATITUDE_TOLERANCE_RAD`]. A `false` here means the iteration cap
    /// was hit first; the solution is still returned.
    pub fn converged(&self) -> bool {
        self.converged
    }
}

impl std::fmt::Display for GeodeticSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Geodetic(lon={:.6} deg, lat={:.6} deg, hae={:.6} km)",
            self.longitude.degrees(),
            self.latitude.degrees(),
            self.height_km
        )
    }
}

/// Solves the geodetic longitude, latitude, and ellipsoid height of a
/// station from its ECEF position.
///
/// Longitude is `atan2(y, x)`. Latitude starts from the geocentric value
/// `asin(z / |r|)` and is refined by fixed-point iteration: at each pass the
/// prime-vertical radius `c = a / sqrt(1 - e²·sin²(lat))` is evaluated at
/// the current estimate and the latitude is updated to
/// `atan((z + c·e²·sin(lat)) / sqrt(x² + y²))`. The loop runs until the
/// estimate moves by at most [`LATITUDE_TOLERANCE_RAD`] or
/// [`MAX_ITERATIONS`] passes, whichever comes first. Height above the
/// ellipsoid falls out of the final pass.
///
/// # Errors
///
/// - [`FrameError::Math`] if any station component is NaN or infinite.
/// - [`FrameError::SingularStation`] if the station sits at the geocenter
///   or anywhere on the polar axis (`x = y = 0`), where longitude and
///   geodetic latitude are undefined.
pub fn solve_geodetic(station: &EcefPosition) -> FrameResult<GeodeticSolution> {
    let x = require_finite("station x_km", station.x_km())?;
    let y = require_finite("station y_km", station.y_km())?;
    let z = require_finite("station z_km", station.z_km())?;

    let geocentric_distance_km = station.position_vector().magnitude();
    if geocentric_distance_km == 0.0 {
        return Err(FrameError::singular_station(
            "station coincides with the geocenter; no local vertical exists",
        ));
    }

    let equatorial_distance_km = libm::sqrt(x * x + y * y);
    if equatorial_distance_km == 0.0 {
        return Err(FrameError::singular_station(format!(
            "station (z_km = {}) lies on the polar axis, where longitude and \
             geodetic latitude are undefined",
            z
        )));
    }

    let longitude_rad = libm::atan2(y, x);

    // Geocentric latitude seeds the iteration. The ratio is mathematically
    // within [-1, 1] but can round a hair outside it near the poles.
    let mut latitude_rad = clamped_asin(z / geocentric_distance_km);

    let mut iterations = 0u32;
    let mut converged = false;
    let prime_vertical_radius_km;

    loop {
        let sin_lat = libm::sin(latitude_rad);
        let denominator = libm::sqrt(1.0 - EARTH_ECCENTRICITY_SQUARED * sin_lat * sin_lat);
        let c_km = EARTH_SEMI_MAJOR_AXIS_KM / denominator;

        let previous_rad = latitude_rad;
        latitude_rad = libm::atan(
            (z + c_km * EARTH_ECCENTRICITY_SQUARED * sin_lat) / equatorial_distance_km,
        );
        iterations += 1;

        if (latitude_rad - previous_rad).abs() <= LATITUDE_TOLERANCE_RAD {
            converged = true;
            prime_vertical_radius_km = c_km;
            break;
        }
        if iterations >= MAX_ITERATIONS {
            prime_vertical_radius_km = c_km;
            break;
        }
    }

    let height_km = equatorial_distance_km / libm::cos(latitude_rad) - prime_vertical_radius_km;

    Ok(GeodeticSolution {
        longitude: Angle::from_radians(longitude_rad),
        latitude: Angle::from_radians(latitude_rad),
        equatorial_distance_km,
        prime_vertical_radius_km,
        height_km,
        iterations,
        converged,
    })
}
