//! Astronomical season on fixed calendar boundaries.
//!
//! Boundaries are Mar 20, Jun 21, Sep 22 and Dec 21 every year; the real
//! equinoxes and solstices drift by a day or so around these.

use chrono::{DateTime, Datelike, TimeZone};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    Northern,
    Southern,
}

impl Hemisphere {
    /// The equator counts as northern.
    pub fn from_latitude(latitude_deg: f64) -> Self {
        if latitude_deg < 0.0 {
            Hemisphere::Southern
        } else {
            Hemisphere::Northern
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    fn opposite(self) -> Self {
        match self {
            Season::Spring => Season::Autumn,
            Season::Summer => Season::Winter,
            Season::Autumn => Season::Spring,
            Season::Winter => Season::Summer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

/// (month, day) on which each northern season starts.
const NORTHERN_STARTS: [((u32, u32), Season); 4] = [
    ((3, 20), Season::Spring),
    ((6, 21), Season::Summer),
    ((9, 22), Season::Autumn),
    ((12, 21), Season::Winter),
];

/// Season at `instant` on its own calendar, for an observer at `latitude_deg`.
pub fn season<Tz: TimeZone>(instant: &DateTime<Tz>, latitude_deg: f64) -> Season {
    let date = instant.date_naive();
    let today = (date.month(), date.day());
    let northern = NORTHERN_STARTS
        .iter()
        .rev()
        .find(|(start, _)| today >= *start)
        .map(|(_, season)| *season)
        .unwrap_or(Season::Winter);

    match Hemisphere::from_latitude(latitude_deg) {
        Hemisphere::Northern => northern,
        Hemisphere::Southern => northern.opposite(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn on(month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn northern_boundaries_are_inclusive() {
        assert_eq!(season(&on(3, 19), 45.0), Season::Winter);
        assert_eq!(season(&on(3, 20), 45.0), Season::Spring);
        assert_eq!(season(&on(6, 21), 45.0), Season::Summer);
        assert_eq!(season(&on(9, 21), 45.0), Season::Summer);
        assert_eq!(season(&on(9, 22), 45.0), Season::Autumn);
        assert_eq!(season(&on(12, 20), 45.0), Season::Autumn);
        assert_eq!(season(&on(12, 21), 45.0), Season::Winter);
        assert_eq!(season(&on(1, 1), 45.0), Season::Winter);
    }

    #[test]
    fn southern_hemisphere_is_flipped() {
        assert_eq!(season(&on(1, 1), -33.9), Season::Summer);
        assert_eq!(season(&on(7, 4), -33.9), Season::Winter);
        assert_eq!(season(&on(4, 1), -33.9), Season::Autumn);
        assert_eq!(season(&on(10, 1), -33.9).label(), "Spring");
    }

    #[test]
    fn equator_is_northern() {
        assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::Northern);
        assert_eq!(season(&on(7, 4), 0.0), Season::Summer);
    }
}
