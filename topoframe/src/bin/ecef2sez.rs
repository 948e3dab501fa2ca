//! Command-line ECEF to SEZ converter.
//!
//! Reads a station position and a target position in Earth-centered
//! Earth-fixed kilometers and prints the target's South-East-Zenith
//! components, one per line.
//!
//! Exit status: 0 on success, 2 for command-line usage errors, 1 when a
//! coordinate cannot be parsed or the station position is singular. All
//! diagnostics go to stderr.

use clap::{Parser, ValueEnum};
use topoframe::{EcefPosition, SezFrame, SezVector};

const NUMERIC_USAGE: &str = "o_x_km, o_y_km, o_z_km, x_km, y_km, and z_km must be numeric";

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "ecef2sez")]
#[command(about = "Convert an ECEF target position to a station's South-East-Zenith frame")]
struct Cli {
    /// Station ECEF X coordinate, kilometers
    #[arg(allow_negative_numbers = true)]
    o_x_km: String,
    /// Station ECEF Y coordinate, kilometers
    #[arg(allow_negative_numbers = true)]
    o_y_km: String,
    /// Station ECEF Z coordinate, kilometers
    #[arg(allow_negative_numbers = true)]
    o_z_km: String,
    /// Target ECEF X coordinate, kilometers
    #[arg(allow_negative_numbers = true)]
    x_km: String,
    /// Target ECEF Y coordinate, kilometers
    #[arg(allow_negative_numbers = true)]
    y_km: String,
    /// Target ECEF Z coordinate, kilometers
    #[arg(allow_negative_numbers = true)]
    z_km: String,
    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    format: OutputFormat,
    /// Print the station's solved geodetic coordinates to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let station = EcefPosition::new(
        parse_km(&cli.o_x_km)?,
        parse_km(&cli.o_y_km)?,
        parse_km(&cli.o_z_km)?,
    );
    let target = EcefPosition::new(
        parse_km(&cli.x_km)?,
        parse_km(&cli.y_km)?,
        parse_km(&cli.z_km)?,
    );

    let frame = SezFrame::from_station(station)?;
    let sez = frame.project(&target);

    if cli.verbose {
        let geo = frame.geodetic();
        eprintln!("Station {}", geo);
        eprintln!(
            "Latitude solve: {} iteration(s), converged: {}",
            geo.iterations(),
            geo.converged()
        );
    }

    match cli.format {
        OutputFormat::Plain => print_plain(&sez),
        OutputFormat::Json => print_json(&frame, &sez),
        OutputFormat::Csv => print_csv(&sez),
    }

    Ok(())
}

fn parse_km(s: &str) -> anyhow::Result<f64> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => anyhow::bail!(NUMERIC_USAGE),
    }
}

fn print_plain(sez: &SezVector) {
    println!("{}", sez.south_km());
    println!("{}", sez.east_km());
    println!("{}", sez.zenith_km());
}

#[derive(serde::Serialize)]
struct JsonTransform {
    s_km: f64,
    e_km: f64,
    z_km: f64,
    range_km: f64,
    azimuth_deg: f64,
    elevation_deg: f64,
    station_longitude_deg: f64,
    station_latitude_deg: f64,
    station_height_km: f64,
}

fn print_json(frame: &SezFrame, sez: &SezVector) {
    let geo = frame.geodetic();
    let report = JsonTransform {
        s_km: sez.south_km(),
        e_km: sez.east_km(),
        z_km: sez.zenith_km(),
        range_km: sez.range_km(),
        azimuth_deg: sez.azimuth().degrees(),
        elevation_deg: sez.elevation().degrees(),
        station_longitude_deg: geo.longitude().degrees(),
        station_latitude_deg: geo.latitude().degrees(),
        station_height_km: geo.height_km(),
    };

    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}

fn print_csv(sez: &SezVector) {
    println!("s_km,e_km,z_km");
    println!("{},{},{}", sez.south_km(), sez.east_km(), sez.zenith_km());
}
