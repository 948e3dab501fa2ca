use topoframe::{Angle, EcefPosition, SezFrame, SezVector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- Setup: tracking station ---

    // Kennedy Space Center, Florida
    let station = EcefPosition::from_geodetic(
        Angle::from_degrees(-80.6041),
        Angle::from_degrees(28.6084),
        0.003,
    )?;
    let frame = SezFrame::from_station(station)?;

    let geo = frame.geodetic();
    println!("Station: {}", station);
    println!(
        "Solved:  lon = {:.4}°  lat = {:.4}°  hae = {:.4} km ({} iterations)",
        geo.longitude().degrees(),
        geo.latitude().degrees(),
        geo.height_km(),
        geo.iterations()
    );
    println!();

    // --- A low-orbit target northeast of the station ---

    let target = EcefPosition::new(1022.5, -5799.4, 3400.0);
    let sez = frame.project(&target);

    println!("=== Target {} ===", target);
    println!(
        "SEZ:   S = {:.4} km  E = {:.4} km  Z = {:.4} km",
        sez.south_km(),
        sez.east_km(),
        sez.zenith_km()
    );
    println!(
        "Look:  Az = {:.4}°  El = {:.4}°  Range = {:.4} km",
        sez.azimuth().degrees(),
        sez.elevation().degrees(),
        sez.range_km()
    );
    println!();

    // --- The same geometry from the far side of the Earth ---

    let hidden = EcefPosition::new(-1022.5, 5799.4, -3400.0);
    let sez = frame.project(&hidden);

    println!("=== Target {} ===", hidden);
    println!(
        "Look:  Az = {:.4}°  El = {:.4}°  Range = {:.4} km",
        sez.azimuth().degrees(),
        sez.elevation().degrees(),
        sez.range_km()
    );
    if sez.elevation().degrees() < 0.0 {
        println!("       (below horizon)");
    }
    println!();

    // --- Placing a target from look angles: unproject ---

    // 100 km north, 100 km east, 141.42 km up: a 45°/45° look
    let aloft = SezVector::new(-100.0, 100.0, 100.0 * std::f64::consts::SQRT_2);
    let placed = frame.unproject(&aloft);
    let back = frame.project(&placed);

    println!("=== Unproject roundtrip ===");
    println!("SEZ in:   {}", aloft);
    println!("ECEF:     {}", placed);
    println!("SEZ back: {}", back);
    println!(
        "Look:     Az = {:.2}°  El = {:.2}°  Range = {:.2} km",
        back.azimuth().degrees(),
        back.elevation().degrees(),
        back.range_km()
    );

    Ok(())
}
