//! The station-local South-East-Zenith frame.
//!
//! SEZ is a right-handed topocentric frame anchored at a station: +S points
//! due geodetic south along the local horizon, +E due east, +Z along the
//! outward ellipsoid normal. A target's SEZ vector is its ECEF displacement
//! from the station rotated into that frame.
//!
//! Building the rotation takes the station's geodetic longitude and
//! latitude (see [`crate::geodesy`]); applying it is two passive axis
//! rotations, longitude about Z and colatitude about Y. Both are folded
//! into a single matrix by [`SezFrame::from_station`], so projecting many
//! targets against one station solves the geodetic iteration only once.

use crate::errors::FrameResult;
use crate::frames::EcefPosition;
use crate::geodesy::{solve_geodetic, GeodeticSolution};
use topoframe_core::{Angle, RotationMatrix3, Vector3};

use serde::{Deserialize, Serialize};

/// A displacement expressed in a station's South-East-Zenith frame,
/// in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SezVector {
    south_km: f64,
    east_km: f64,
    zenith_km: f64,
}

impl SezVector {
    pub fn new(south_km: f64, east_km: f64, zenith_km: f64) -> Self {
        Self {
            south_km,
            east_km,
            zenith_km,
        }
    }

    pub fn south_km(&self) -> f64 {
        self.south_km
    }

    pub fn east_km(&self) -> f64 {
        self.east_km
    }

    pub fn zenith_km(&self) -> f64 {
        self.zenith_km
    }

    pub fn to_vector(&self) -> Vector3 {
        Vector3::new(self.south_km, self.east_km, self.zenith_km)
    }

    pub fn from_vector(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Slant range from the station to the target, kilometers.
    pub fn range_km(&self) -> f64 {
        self.to_vector().magnitude()
    }

    /// Elevation above the station's horizon plane.
    ///
    /// +90 degrees for a target at the station's zenith, negative below the
    /// horizon. Zero for the zero vector.
    pub fn elevation(&self) -> Angle {
        let horizontal_km =
            libm::sqrt(self.south_km * self.south_km + self.east_km * self.east_km);
        Angle::from_radians(libm::atan2(self.zenith_km, horizontal_km))
    }

    /// Azimuth measured from geodetic north, clockwise through east,
    /// normalized to [0, 360) degrees.
    ///
    /// North is the -S direction, so a target due north has azimuth 0 and a
    /// target due east has azimuth 90 degrees.
    pub fn azimuth(&self) -> Angle {
        Angle::from_radians(libm::atan2(self.east_km, -self.south_km)).normalized()
    }
}

impl std::fmt::Display for SezVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SEZ(S={:.6} km, E={:.6} km, Z={:.6} km)",
            self.south_km, self.east_km, self.zenith_km
        )
    }
}

/// A station's topocentric frame: the solved geodetic description plus the
/// ECEF-to-SEZ rotation.
///
/// ```
/// use topoframe::{EcefPosition, SezFrame};
///
/// let station = EcefPosition::new(0.0, 6378.1363, 0.0);
/// let frame = SezFrame::from_station(station)?;
///
/// let target = EcefPosition::new(0.0, 6878.1363, 0.0);
/// let sez = frame.project(&target);
/// assert!((sez.zenith_km() - 500.0).abs() < 1e-9);
/// # Ok::<(), topoframe::FrameError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SezFrame {
    station: EcefPosition,
    geodetic: GeodeticSolution,
    rotation: RotationMatrix3,
}

impl SezFrame {
    /// Solves the station's geodetic angles and builds the frame rotation.
    ///
    /// The rotation is assembled in the passive convention: longitude about
    /// Z first, then colatitude (90 degrees minus geodetic latitude) about
    /// Y. Expanded, projecting a displacement `d` gives
    ///
    /// ```text
    /// s =  (d.x·cos(lon) + d.y·sin(lon))·sin(lat) - d.z·cos(lat)
    /// e = -d.x·sin(lon) + d.y·cos(lon)
    /// z =  (d.x·cos(lon) + d.y·sin(lon))·cos(lat) + d.z·sin(lat)
    /// ```
    ///
    /// # Errors
    ///
    /// Everything [`solve_geodetic`] reports: non-finite components, the
    /// geocenter, and stations on the polar axis.
    pub fn from_station(station: EcefPosition) -> FrameResult<Self> {
        let geodetic = solve_geodetic(&station)?;

        let mut rotation = RotationMatrix3::identity();
        rotation.rotate_z(geodetic.longitude().radians());
        rotation.rotate_y(Angle::HALF_PI.radians() - geodetic.latitude().radians());

        Ok(Self {
            station,
            geodetic,
            rotation,
        })
    }

    pub fn station(&self) -> &EcefPosition {
        &self.station
    }

    /// The geodetic solution the frame was built from.
    pub fn geodetic(&self) -> &GeodeticSolution {
        &self.geodetic
    }

    /// The ECEF-to-SEZ rotation matrix.
    pub fn rotation(&self) -> &RotationMatrix3 {
        &self.rotation
    }

    /// Expresses a target's displacement from the station in SEZ.
    pub fn project(&self, target: &EcefPosition) -> SezVector {
        let displacement = self.station.displacement_to(target);
        SezVector::from_vector(&self.rotation * displacement)
    }

    /// Maps an SEZ displacement back to the ECEF position it points at.
    ///
    /// Inverse of [`project`](Self::project): applies the transposed
    /// rotation and re-anchors at the station.
    pub fn unproject(&self, sez: &SezVector) -> EcefPosition {
        let displacement = self.rotation.transpose() * sez.to_vector();
        EcefPosition::from_position_vector(self.station.position_vector() + displacement)
    }
}

impl std::fmt::Display for SezFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SezFrame({} at {})", self.geodetic, self.station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topoframe_core::assert_ulp_lt;
    use topoframe_core::constants::EARTH_SEMI_MAJOR_AXIS_KM;
    use topoframe_core::test_helpers::assert_vec3_eq;

    fn equatorial_y_frame() -> SezFrame {
        SezFrame::from_station(EcefPosition::new(0.0, EARTH_SEMI_MAJOR_AXIS_KM, 0.0)).unwrap()
    }

    #[test]
    fn test_station_projects_to_zero() {
        let station = EcefPosition::new(1234.5, -5432.1, 3000.0);
        let frame = SezFrame::from_station(station).unwrap();

        let sez = frame.project(&station);
        assert_eq!(sez.south_km(), 0.0);
        assert_eq!(sez.east_km(), 0.0);
        assert_eq!(sez.zenith_km(), 0.0);
    }

    #[test]
    fn test_radial_target_is_pure_zenith() {
        let frame = equatorial_y_frame();
        let target = EcefPosition::new(0.0, EARTH_SEMI_MAJOR_AXIS_KM + 500.0, 0.0);

        let sez = frame.project(&target);
        assert!(sez.south_km().abs() < 1e-9);
        assert!(sez.east_km().abs() < 1e-9);
        assert!((sez.zenith_km() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_north_displacement_is_negative_south() {
        // At an equatorial station, ECEF +Z points due geodetic north
        let frame = equatorial_y_frame();
        let target = EcefPosition::new(0.0, EARTH_SEMI_MAJOR_AXIS_KM, 500.0);

        let sez = frame.project(&target);
        assert!((sez.south_km() + 500.0).abs() < 1e-9);
        assert!(sez.east_km().abs() < 1e-9);
        assert!(sez.zenith_km().abs() < 1e-9);
    }

    #[test]
    fn test_east_displacement_at_prime_meridian() {
        let station = EcefPosition::new(EARTH_SEMI_MAJOR_AXIS_KM, 0.0, 0.0);
        let frame = SezFrame::from_station(station).unwrap();
        let target = EcefPosition::new(EARTH_SEMI_MAJOR_AXIS_KM, 100.0, 0.0);

        let sez = frame.project(&target);
        assert!(sez.south_km().abs() < 1e-9);
        assert!((sez.east_km() - 100.0).abs() < 1e-9);
        assert!(sez.zenith_km().abs() < 1e-9);
    }

    #[test]
    fn test_antimeridian_station_flips_east_sign() {
        // The same ECEF +Y displacement is east at lon 0 but west at lon 180
        let station = EcefPosition::new(-EARTH_SEMI_MAJOR_AXIS_KM, 0.0, 0.0);
        let frame = SezFrame::from_station(station).unwrap();
        let target = EcefPosition::new(-EARTH_SEMI_MAJOR_AXIS_KM, 100.0, 0.0);

        let sez = frame.project(&target);
        assert!((sez.east_km() + 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        let station = EcefPosition::from_geodetic(
            Angle::from_degrees(4.3876),
            Angle::from_degrees(51.9861),
            0.0744,
        )
        .unwrap();
        let frame = SezFrame::from_station(station).unwrap();

        assert!(frame.rotation().is_rotation_matrix(1e-14));
    }

    #[test]
    fn test_rotation_matches_expanded_form() {
        let station = EcefPosition::new(3900.0, 300.0, 5000.0);
        let frame = SezFrame::from_station(station).unwrap();
        let geo = frame.geodetic();

        let (sin_lat, cos_lat) = geo.latitude().sin_cos();
        let (sin_lon, cos_lon) = geo.longitude().sin_cos();
        let expected = RotationMatrix3::from_array([
            [sin_lat * cos_lon, sin_lat * sin_lon, -cos_lat],
            [-sin_lon, cos_lon, 0.0],
            [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat],
        ]);

        assert!(frame.rotation().max_difference(&expected) < 1e-14);
    }

    #[test]
    fn test_project_unproject_roundtrip() {
        let station = EcefPosition::from_geodetic(
            Angle::from_degrees(-80.6),
            Angle::from_degrees(28.5),
            0.003,
        )
        .unwrap();
        let frame = SezFrame::from_station(station).unwrap();
        let target = EcefPosition::new(5000.0, -3200.0, 4100.0);

        let sez = frame.project(&target);
        let recovered = frame.unproject(&sez);

        assert_vec3_eq(
            &recovered.position_vector(),
            &target.position_vector(),
            512,
            "unproject(project(target))",
        );
    }

    #[test]
    fn test_projection_preserves_range() {
        let frame = equatorial_y_frame();
        let target = EcefPosition::new(800.0, 7000.0, -1500.0);

        let sez = frame.project(&target);
        let direct = frame.station().distance_to(&target);
        assert_ulp_lt!(sez.range_km(), direct, 64, "slant range vs ECEF distance");
    }

    #[test]
    fn test_zenith_target_elevation_is_plus_ninety() {
        let frame = equatorial_y_frame();

        let above = frame.project(&EcefPosition::new(0.0, EARTH_SEMI_MAJOR_AXIS_KM + 500.0, 0.0));
        assert!((above.elevation().degrees() - 90.0).abs() < 1e-6);

        let below = frame.project(&EcefPosition::new(0.0, EARTH_SEMI_MAJOR_AXIS_KM - 500.0, 0.0));
        assert!((below.elevation().degrees() + 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_azimuth_cardinal_directions() {
        let north = SezVector::new(-10.0, 0.0, 0.0);
        assert!((north.azimuth().degrees() - 0.0).abs() < 1e-12);

        let east = SezVector::new(0.0, 10.0, 0.0);
        assert!((east.azimuth().degrees() - 90.0).abs() < 1e-12);

        let south = SezVector::new(10.0, 0.0, 0.0);
        assert!((south.azimuth().degrees() - 180.0).abs() < 1e-12);

        let west = SezVector::new(0.0, -10.0, 0.0);
        assert!((west.azimuth().degrees() - 270.0).abs() < 1e-12);
    }

    #[test]
    fn test_singular_station_rejected() {
        assert!(SezFrame::from_station(EcefPosition::new(0.0, 0.0, 6356.7)).is_err());
        assert!(SezFrame::from_station(EcefPosition::new(0.0, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_sez_vector_display() {
        let sez = SezVector::new(1.5, -2.5, 3.5);
        let text = format!("{}", sez);
        assert!(text.contains("S=1.500000 km"));
        assert!(text.contains("E=-2.500000 km"));
        assert!(text.contains("Z=3.500000 km"));
    }
}
