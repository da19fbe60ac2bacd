//! Compact numbers and unit-labelled strings.

use worldline_core::units::{DistanceUnit, SpeedUnit};

const COMPACT_SUFFIXES: [(f64, &str); 4] = [(1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

/// Abbreviate large magnitudes with K/M/B/T suffixes.
///
/// A value that would round up to 1000 of one suffix moves to the next one,
/// so `999_960` at one decimal is `1.0M` rather than `1000.0K`. Non-finite
/// values are printed as-is.
pub fn format_compact(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    let mut tier = COMPACT_SUFFIXES
        .iter()
        .rposition(|(scale, _)| magnitude >= *scale);
    loop {
        let scale = tier.map_or(1.0, |i| COMPACT_SUFFIXES[i].0);
        let next = tier.map_or(0, |i| i + 1);
        if next < COMPACT_SUFFIXES.len() && round_to(magnitude / scale, decimals) >= 1_000.0 {
            tier = Some(next);
        } else {
            break;
        }
    }

    match tier {
        Some(i) => {
            let (scale, suffix) = COMPACT_SUFFIXES[i];
            format!("{:.*}{}", decimals, value / scale, suffix)
        }
        None => format!("{:.*}", decimals, value),
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Distance given in km, converted and abbreviated, e.g. `1.33M km`.
pub fn format_distance(km: f64, unit: DistanceUnit, decimals: usize) -> String {
    format!("{} {}", format_compact(unit.from_km(km), decimals), unit.symbol())
}

/// Speed given in km/s, converted, e.g. `0.357 km/s`.
pub fn format_speed(kms: f64, unit: SpeedUnit, decimals: usize) -> String {
    format!("{:.*} {}", decimals, unit.from_kms(kms), unit.symbol())
}

/// Speed with its one-sigma uncertainty when one is given, e.g. `220.0 ± 15.0 km/s`.
pub fn format_speed_with_uncertainty(
    kms: f64,
    sigma_kms: Option<f64>,
    unit: SpeedUnit,
    decimals: usize,
) -> String {
    match sigma_kms {
        Some(sigma) => format!(
            "{:.*} ± {:.*} {}",
            decimals,
            unit.from_kms(kms),
            decimals,
            unit.from_kms(sigma),
            unit.symbol()
        ),
        None => format_speed(kms, unit, decimals),
    }
}
