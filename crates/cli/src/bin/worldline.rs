use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing::info;
use worldline::almanac::{moon_phase, season};
use worldline::export::format::{format_distance, format_speed, format_speed_with_uncertainty};
use worldline::export::{snapshot, writer_for_path};
use worldline::frames::{FrameReading, is_significant_uncertainty_with_threshold};
use worldline::state::{Frame, WorldlineCalculator, WorldlineState, format_date_input};
use worldline::time::seconds_to_julian_years;
use worldline::units::{DistanceUnit, SpeedUnit};

#[path = "shared/mod.rs"]
mod shared;

use shared::ObserverArgs;

/// Velocity and distance travelled since birth in four nested reference frames.
#[derive(Parser, Debug)]
#[command(author, version, about = "Worldline calculator (spin, orbit, galaxy, CMB)")]
struct Cli {
    #[command(flatten)]
    observer: ObserverArgs,

    /// Unit for distances (defaults to profile setting, then km)
    #[arg(long, value_enum)]
    distance_unit: Option<DistanceChoice>,

    /// Unit for speeds (defaults to profile setting, then km/s)
    #[arg(long, value_enum)]
    speed_unit: Option<SpeedChoice>,

    /// Write the snapshot as JSON (`-` for stdout, replacing the text report)
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum DistanceChoice {
    Km,
    Miles,
    Au,
    LightYears,
    Parsecs,
}

impl From<DistanceChoice> for DistanceUnit {
    fn from(choice: DistanceChoice) -> Self {
        match choice {
            DistanceChoice::Km => DistanceUnit::Km,
            DistanceChoice::Miles => DistanceUnit::Miles,
            DistanceChoice::Au => DistanceUnit::Au,
            DistanceChoice::LightYears => DistanceUnit::LightYears,
            DistanceChoice::Parsecs => DistanceUnit::Parsecs,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum SpeedChoice {
    Kms,
    Kmh,
    Mph,
    Ms,
}

impl From<SpeedChoice> for SpeedUnit {
    fn from(choice: SpeedChoice) -> Self {
        match choice {
            SpeedChoice::Kms => SpeedUnit::KmPerSecond,
            SpeedChoice::Kmh => SpeedUnit::KmPerHour,
            SpeedChoice::Mph => SpeedUnit::MilesPerHour,
            SpeedChoice::Ms => SpeedUnit::MetersPerSecond,
        }
    }
}

fn main() -> anyhow::Result<()> {
    shared::init_tracing();
    let cli = Cli::parse();
    let observer = cli.observer.resolve()?;

    let distance_unit = cli
        .distance_unit
        .map(DistanceUnit::from)
        .unwrap_or(observer.display.distance_unit);
    let speed_unit = cli
        .speed_unit
        .map(SpeedUnit::from)
        .unwrap_or(observer.display.speed_unit);
    let threshold = observer.display.uncertainty_threshold;

    let state = WorldlineCalculator::new()
        .cmb_reference(observer.cmb_reference)
        .compute(
            &observer.birth,
            observer.latitude_deg,
            observer.target.as_ref().map(Into::into),
        )?;

    // stdout carries only the JSON document when it is the export target
    let json_to_stdout = cli.json.as_deref() == Some(Path::new("-"));
    if !json_to_stdout {
        print_state(&state, distance_unit, speed_unit, threshold);
    }

    if let Some(path) = &cli.json {
        let writer = writer_for_path(path)?;
        snapshot::write_json(writer, &state)?;
        info!(path = %path.display(), "wrote JSON snapshot");
    }

    Ok(())
}

fn print_state(
    state: &WorldlineState,
    distance_unit: DistanceUnit,
    speed_unit: SpeedUnit,
    threshold: f64,
) {
    let age = state.age();
    let moon = moon_phase(&state.timestamp);

    println!("=== Worldline ===");
    println!("Born           : {}", state.birth_date.format("%Y-%m-%d %H:%M"));
    println!("At             : {}", state.timestamp.format("%Y-%m-%d %H:%M:%S"));
    println!("Latitude       : {:.4}°", state.latitude_deg);
    println!(
        "Age            : {}y {}m {}d {:02}h {:02}m {:02}s{}",
        age.years,
        age.months,
        age.days,
        age.hours,
        age.minutes,
        age.seconds,
        if age.is_pre_birth {
            " (target precedes birth)"
        } else {
            ""
        }
    );
    println!("Birthday       : {}", format_date_input(&state.birth_date));

    println!("--- Velocity ---");
    for reading in state.frames.iter() {
        let significant = is_significant_uncertainty_with_threshold(
            reading.velocity_kms(),
            reading.uncertainty_kms(),
            threshold,
        );
        let speed = if significant {
            format_speed_with_uncertainty(
                reading.velocity_kms(),
                reading.uncertainty_kms(),
                speed_unit,
                3,
            )
        } else {
            format_speed(reading.velocity_kms(), speed_unit, 3)
        };
        println!("{:<15}: {}", reading.frame().label(), speed);
    }
    let orbit = state.frames.orbit;
    println!(
        "{:<15}  aphelion {}, perihelion {}",
        "",
        format_speed(orbit.aphelion_velocity_kms, speed_unit, 3),
        format_speed(orbit.perihelion_velocity_kms, speed_unit, 3)
    );
    let galaxy = state.frames.galaxy;
    println!(
        "{:<15}  {:.3e} of a {:.0} Myr galactic orbit, {} ly from the centre",
        "",
        seconds_to_julian_years(state.duration_seconds.max(0.0)) / galaxy.orbital_period_years,
        galaxy.orbital_period_years / 1.0e6,
        galaxy.galactic_center_distance_ly
    );
    let cmb = state.frames.cmb;
    println!(
        "{:<15}  {} toward l={:.1}°, b={:.1}°",
        "",
        cmb.reference,
        cmb.direction.longitude_deg,
        cmb.direction.latitude_deg
    );

    println!("--- Distance travelled ---");
    for frame in Frame::ALL {
        let distance = state.distance(frame);
        println!(
            "{:<15}: {}",
            frame.label(),
            format_distance(distance.path_length_km, distance_unit, 2)
        );
    }
    println!(
        "{:<15}: {}",
        "Total",
        format_distance(state.total_distance_km(), distance_unit, 2)
    );

    println!("--- Sky ---");
    println!(
        "Moon           : {} ({:.0}% lit)",
        moon.name.label(),
        moon.illumination * 100.0
    );
    println!(
        "Season         : {}",
        season(&state.timestamp, state.latitude_deg).label()
    );
}
