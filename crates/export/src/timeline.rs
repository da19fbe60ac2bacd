//! CSV export of sampled worldline timelines.

use std::io::Write;

use chrono::SecondsFormat;
use serde::Serialize;
use worldline_state::WorldlineState;

use crate::ExportError;

/// One CSV row; field order is the column order.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineRow {
    pub timestamp: String,
    pub duration_s: f64,
    pub spin_km: f64,
    pub orbit_km: f64,
    pub galaxy_km: f64,
    pub cmb_km: f64,
    pub total_km: f64,
}

impl From<&WorldlineState> for TimelineRow {
    fn from(state: &WorldlineState) -> Self {
        TimelineRow {
            timestamp: state.timestamp.to_rfc3339_opts(SecondsFormat::Millis, false),
            duration_s: state.duration_seconds,
            spin_km: state.distances.spin.path_length_km,
            orbit_km: state.distances.orbit.path_length_km,
            galaxy_km: state.distances.galaxy.path_length_km,
            cmb_km: state.distances.cmb.path_length_km,
            total_km: state.total_distance_km(),
        }
    }
}

/// Write a header plus one row per state; returns the number of rows.
pub fn write_csv<W: Write>(writer: W, states: &[WorldlineState]) -> Result<usize, ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    for state in states {
        csv.serialize(TimelineRow::from(state))?;
    }
    csv.flush()?;
    Ok(states.len())
}
