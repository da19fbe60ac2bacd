//! Mean lunar phase from a fixed reference new moon.

use std::f64::consts::PI;

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use worldline_core::time::seconds_to_days;

/// Mean synodic month (days).
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;
/// New moon of 2000-01-06 18:14 UTC, as Unix milliseconds.
pub const REFERENCE_NEW_MOON_UNIX_MS: i64 = 947_182_440_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoonPhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhaseName {
    const CYCLE: [MoonPhaseName; 8] = [
        MoonPhaseName::NewMoon,
        MoonPhaseName::WaxingCrescent,
        MoonPhaseName::FirstQuarter,
        MoonPhaseName::WaxingGibbous,
        MoonPhaseName::FullMoon,
        MoonPhaseName::WaningGibbous,
        MoonPhaseName::LastQuarter,
        MoonPhaseName::WaningCrescent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MoonPhaseName::NewMoon => "New Moon",
            MoonPhaseName::WaxingCrescent => "Waxing Crescent",
            MoonPhaseName::FirstQuarter => "First Quarter",
            MoonPhaseName::WaxingGibbous => "Waxing Gibbous",
            MoonPhaseName::FullMoon => "Full Moon",
            MoonPhaseName::WaningGibbous => "Waning Gibbous",
            MoonPhaseName::LastQuarter => "Last Quarter",
            MoonPhaseName::WaningCrescent => "Waning Crescent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPhase {
    /// Days since the most recent mean new moon, in `[0, SYNODIC_MONTH_DAYS)`.
    pub age_days: f64,
    /// Illuminated fraction of the disc, 0 at new moon and 1 at full.
    pub illumination: f64,
    pub name: MoonPhaseName,
}

/// Mean moon phase at `instant`. Accurate to roughly a day.
pub fn moon_phase<Tz: TimeZone>(instant: &DateTime<Tz>) -> MoonPhase {
    let elapsed_ms = instant.timestamp_millis() - REFERENCE_NEW_MOON_UNIX_MS;
    let elapsed_days = seconds_to_days(elapsed_ms as f64 / 1_000.0);
    let age_days = elapsed_days.rem_euclid(SYNODIC_MONTH_DAYS);
    let fraction = age_days / SYNODIC_MONTH_DAYS;
    let illumination = (1.0 - (2.0 * PI * fraction).cos()) / 2.0;
    // eighth-of-cycle buckets centred on each named phase
    let index = ((fraction * 8.0 + 0.5).floor() as usize) % 8;

    MoonPhase {
        age_days,
        illumination,
        name: MoonPhaseName::CYCLE[index],
    }
}
