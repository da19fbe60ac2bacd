//! JSON document for a single worldline snapshot.

use std::io::Write;

use serde::Serialize;
use serde_json::to_writer_pretty;
use worldline_state::{AgeDuration, WorldlineState};

use crate::ExportError;

#[derive(Serialize)]
struct SnapshotDocument<'a> {
    #[serde(flatten)]
    state: &'a WorldlineState,
    age: AgeDuration,
    total_distance_km: f64,
}

/// Write the full state plus its age breakdown and total path length.
pub fn write_json<W: Write>(mut writer: W, state: &WorldlineState) -> Result<(), ExportError> {
    let document = SnapshotDocument {
        state,
        age: state.age(),
        total_distance_km: state.total_distance_km(),
    };
    to_writer_pretty(&mut writer, &document)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
