use crate::errors::{FrameError, FrameResult};
use crate::geodesy::{solve_geodetic, GeodeticSolution};
use topoframe_core::constants::{EARTH_ECCENTRICITY_SQUARED, EARTH_SEMI_MAJOR_AXIS_KM, HALF_PI};
use topoframe_core::math::require_finite;
use topoframe_core::{Angle, Vector3};

use serde::{Deserialize, Serialize};

/// A position in the Earth-Centered-Earth-Fixed frame, in kilometers.
///
/// The frame rotates with the Earth: +X pierces the equator at the prime
/// meridian, +Y at 90 degrees east, +Z at the north pole. Construction does
/// not validate; operations that require a geodetically meaningful position
/// (such as [`to_geodetic`](Self::to_geodetic)) report singular or
/// non-finite inputs through [`FrameError`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcefPosition {
    x_km: f64,
    y_km: f64,
    z_km: f64,
}

impl EcefPosition {
    pub fn new(x_km: f64, y_km: f64, z_km: f64) -> Self {
        Self { x_km, y_km, z_km }
    }

    /// Builds the ECEF position of a point given geodetically.
    ///
    /// Uses the closed form on the reference ellipsoid: with
    /// `N = a / sqrt(1 - e²·sin²(lat))`,
    ///
    /// ```text
    /// x = (N + h)·cos(lat)·cos(lon)
    /// y = (N + h)·cos(lat)·sin(lon)
    /// z = (N·(1 - e²) + h)·sin(lat)
    /// ```
    ///
    /// Longitude is wrapped into [-pi, pi); latitude must already be a real
    /// latitude.
    ///
    /// # Errors
    ///
    /// [`FrameError::InvalidCoordinate`] if the latitude lies beyond a pole,
    /// [`FrameError::Math`] if any input is NaN or infinite.
    pub fn from_geodetic(longitude: Angle, latitude: Angle, height_km: f64) -> FrameResult<Self> {
        require_finite("longitude", longitude.radians())?;
        require_finite("latitude", latitude.radians())?;
        require_finite("height_km", height_km)?;

        if latitude.radians().abs() > HALF_PI {
            return Err(FrameError::invalid_coordinate(format!(
                "latitude {} deg is beyond a pole (valid range: -90 to +90)",
                latitude.degrees()
            )));
        }

        let (sin_lat, cos_lat) = latitude.sin_cos();
        let (sin_lon, cos_lon) = longitude.wrapped().sin_cos();

        let n = EARTH_SEMI_MAJOR_AXIS_KM
            / libm::sqrt(1.0 - EARTH_ECCENTRICITY_SQUARED * sin_lat * sin_lat);

        let r = (n + height_km) * cos_lat;
        let x_km = r * cos_lon;
        let y_km = r * sin_lon;
        let z_km = (n * (1.0 - EARTH_ECCENTRICITY_SQUARED) + height_km) * sin_lat;

        Ok(Self::new(x_km, y_km, z_km))
    }

    pub fn x_km(&self) -> f64 {
        self.x_km
    }

    pub fn y_km(&self) -> f64 {
        self.y_km
    }

    pub fn z_km(&self) -> f64 {
        self.z_km
    }

    pub fn position_vector(&self) -> Vector3 {
        Vector3::new(self.x_km, self.y_km, self.z_km)
    }

    pub fn from_position_vector(pos: Vector3) -> Self {
        Self::new(pos.x, pos.y, pos.z)
    }

    /// Solves this position's geodetic longitude, latitude, and ellipsoid
    /// height. See [`solve_geodetic`] for the algorithm and error cases.
    pub fn to_geodetic(&self) -> FrameResult<GeodeticSolution> {
        solve_geodetic(self)
    }

    /// Distance from the geocenter, kilometers.
    pub fn geocentric_distance_km(&self) -> f64 {
        self.position_vector().magnitude()
    }

    /// The displacement vector from this position to `other`, kilometers.
    pub fn displacement_to(&self, other: &Self) -> Vector3 {
        other.position_vector() - self.position_vector()
    }

    /// Straight-line distance to another ECEF position, kilometers.
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.displacement_to(other).magnitude()
    }
}

impl std::fmt::Display for EcefPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ECEF(X={:.6} km, Y={:.6} km, Z={:.6} km)",
            self.x_km, self.y_km, self.z_km
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_and_accessors() {
        let pos = EcefPosition::new(1000.0, 2000.0, 3000.0);
        assert_eq!(pos.x_km(), 1000.0);
        assert_eq!(pos.y_km(), 2000.0);
        assert_eq!(pos.z_km(), 3000.0);
    }

    #[test]
    fn test_vector_roundtrip() {
        let original = EcefPosition::new(1000.0, 2000.0, 3000.0);

        let vec = original.position_vector();
        assert_eq!(vec, Vector3::new(1000.0, 2000.0, 3000.0));

        let recovered = EcefPosition::from_position_vector(vec);
        assert_eq!(recovered, original);
    }

    #[test]
    fn test_from_geodetic_equator_prime_meridian() {
        let pos = EcefPosition::from_geodetic(Angle::ZERO, Angle::ZERO, 0.0).unwrap();

        assert_eq!(pos.x_km(), EARTH_SEMI_MAJOR_AXIS_KM);
        assert_eq!(pos.y_km(), 0.0);
        assert_eq!(pos.z_km(), 0.0);
    }

    #[test]
    fn test_from_geodetic_pole_z_is_polar_radius() {
        let north = EcefPosition::from_geodetic(Angle::ZERO, Angle::HALF_PI, 0.0).unwrap();

        // At the pole z = N·(1 - e²) = a·sqrt(1 - e²), the semi-minor axis
        let semi_minor = EARTH_SEMI_MAJOR_AXIS_KM * libm::sqrt(1.0 - EARTH_ECCENTRICITY_SQUARED);
        assert!((north.z_km() - semi_minor).abs() < 1e-9);
        assert!(north.z_km() < EARTH_SEMI_MAJOR_AXIS_KM);
        assert!(north.x_km().abs() < 1e-9);
    }

    #[test]
    fn test_from_geodetic_wraps_longitude() {
        let direct = EcefPosition::from_geodetic(
            Angle::from_degrees(-170.0),
            Angle::from_degrees(10.0),
            0.0,
        )
        .unwrap();
        let wrapped = EcefPosition::from_geodetic(
            Angle::from_degrees(190.0),
            Angle::from_degrees(10.0),
            0.0,
        )
        .unwrap();

        assert!((direct.x_km() - wrapped.x_km()).abs() < 1e-6);
        assert!((direct.y_km() - wrapped.y_km()).abs() < 1e-6);
        assert_eq!(direct.z_km(), wrapped.z_km());
    }

    #[test]
    fn test_from_geodetic_rejects_latitude_beyond_pole() {
        let err = EcefPosition::from_geodetic(Angle::ZERO, Angle::from_degrees(90.001), 0.0)
            .unwrap_err();
        assert!(matches!(err, FrameError::InvalidCoordinate { .. }));
        assert!(err.to_string().contains("beyond a pole"));
    }

    #[test]
    fn test_from_geodetic_rejects_non_finite_height() {
        let err = EcefPosition::from_geodetic(Angle::ZERO, Angle::ZERO, f64::NAN).unwrap_err();
        assert!(matches!(err, FrameError::Math { .. }));
    }

    #[test]
    fn test_distances() {
        let a = EcefPosition::new(1000.0, 0.0, 0.0);
        let b = EcefPosition::new(2000.0, 0.0, 0.0);

        assert_eq!(a.distance_to(&b), 1000.0);
        assert_eq!(b.distance_to(&a), 1000.0);
        assert_eq!(a.geocentric_distance_km(), 1000.0);
        assert_eq!(a.displacement_to(&b), Vector3::new(1000.0, 0.0, 0.0));
    }

    #[test]
    fn test_display_formatting() {
        let pos = EcefPosition::new(1234.56789, -987.654321, 555.666777);
        let display = format!("{}", pos);
        assert!(display.contains("ECEF"));
        assert!(display.contains("X=1234.567890 km"));
        assert!(display.contains("Y=-987.654321 km"));
    }
}
