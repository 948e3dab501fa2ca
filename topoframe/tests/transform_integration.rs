use topoframe::geodesy::MAX_ITERATIONS;
use topoframe::{solve_geodetic, Angle, EcefPosition, FrameError, SezFrame, SezVector};

const EQUATOR_KM: f64 = 6378.1363;

fn kennedy_frame() -> SezFrame {
    let station = EcefPosition::from_geodetic(
        Angle::from_degrees(-80.6041),
        Angle::from_degrees(28.6084),
        0.003,
    )
    .unwrap();
    SezFrame::from_station(station).unwrap()
}

// --- Known geometry at the equator ---

#[test]
fn radial_offset_maps_to_pure_zenith() {
    let frame = SezFrame::from_station(EcefPosition::new(0.0, EQUATOR_KM, 0.0)).unwrap();
    let sez = frame.project(&EcefPosition::new(0.0, EQUATOR_KM + 500.0, 0.0));

    assert!(sez.south_km().abs() < 1e-9);
    assert!(sez.east_km().abs() < 1e-9);
    assert!((sez.zenith_km() - 500.0).abs() < 1e-9);
}

#[test]
fn northward_offset_maps_to_negative_south() {
    let frame = SezFrame::from_station(EcefPosition::new(0.0, EQUATOR_KM, 0.0)).unwrap();
    let sez = frame.project(&EcefPosition::new(0.0, EQUATOR_KM, 500.0));

    assert!((sez.south_km() + 500.0).abs() < 1e-9);
    assert!(sez.east_km().abs() < 1e-9);
    assert!(sez.zenith_km().abs() < 1e-9);
}

// --- Geodetic roundtrip through the public surface ---

#[test]
fn solver_recovers_geodetic_construction() {
    let longitude = Angle::from_degrees(-80.6041);
    let latitude = Angle::from_degrees(28.6084);
    let height_km = 0.003;

    let station = EcefPosition::from_geodetic(longitude, latitude, height_km).unwrap();
    let geo = solve_geodetic(&station).unwrap();

    assert!((geo.longitude() - longitude).radians().abs() < 1e-12);
    assert!((geo.latitude() - latitude).radians().abs() < 1e-7);
    assert!((geo.height_km() - height_km).abs() < 1e-3);
}

#[test]
fn solver_metadata_reports_bounded_convergence() {
    let frame = kennedy_frame();
    let geo = frame.geodetic();

    assert!(geo.converged());
    assert!(geo.iterations() >= 1);
    assert!(geo.iterations() <= MAX_ITERATIONS);
}

// --- Project / unproject consistency ---

#[test]
fn unproject_then_project_recovers_sez_components() {
    let frame = kennedy_frame();
    let aloft = SezVector::new(-100.0, 100.0, 100.0 * std::f64::consts::SQRT_2);

    let target = frame.unproject(&aloft);
    let back = frame.project(&target);

    assert!((back.south_km() + 100.0).abs() < 1e-9);
    assert!((back.east_km() - 100.0).abs() < 1e-9);
    assert!((back.zenith_km() - 100.0 * std::f64::consts::SQRT_2).abs() < 1e-9);

    assert!((back.azimuth().degrees() - 45.0).abs() < 1e-9);
    assert!((back.elevation().degrees() - 45.0).abs() < 1e-9);
    assert!((back.range_km() - 200.0).abs() < 1e-9);
}

#[test]
fn one_frame_serves_many_targets() {
    let frame = kennedy_frame();
    let targets = [
        EcefPosition::new(1100.0, -6100.0, 3300.0),
        EcefPosition::new(900.0, -5900.0, 3500.0),
        EcefPosition::new(-2400.0, -5200.0, 3900.0),
        EcefPosition::new(5000.0, 2000.0, -4000.0),
    ];

    for target in &targets {
        let sez = frame.project(target);
        let direct = frame.station().distance_to(target);
        assert!((sez.range_km() - direct).abs() < 1e-9);
    }
}

// --- Failure paths ---

#[test]
fn polar_station_is_rejected_as_singular() {
    let err = SezFrame::from_station(EcefPosition::new(0.0, 0.0, 6356.75)).unwrap_err();
    assert!(matches!(err, FrameError::SingularStation { .. }));
    assert!(err.to_string().contains("polar axis"));
}

#[test]
fn geocenter_station_is_rejected_as_singular() {
    let err = SezFrame::from_station(EcefPosition::new(0.0, 0.0, 0.0)).unwrap_err();
    assert!(matches!(err, FrameError::SingularStation { .. }));
    assert!(err.to_string().contains("geocenter"));
}

#[test]
fn non_finite_station_is_rejected() {
    let err = SezFrame::from_station(EcefPosition::new(f64::NAN, 100.0, 100.0)).unwrap_err();
    assert!(matches!(err, FrameError::Math { .. }));
}
