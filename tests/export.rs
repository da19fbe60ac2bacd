use std::collections::HashMap;
use std::fs;

use tempfile::tempdir;
use worldline::config::{find_profile, load_profiles};
use worldline::export::{format, snapshot, timeline, writer_for_path};
use worldline::state::sample_timeline;
use worldline::units::{DistanceUnit, SpeedUnit};
use worldline::{CmbReference, compute_worldline_state};

#[test]
fn timeline_csv_reads_back() {
    let states = sample_timeline(
        "1990-06-15",
        40.0,
        Some("1990-06-16".into()),
        24,
        CmbReference::Ssb,
    )
    .unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("out/timeline.csv");
    {
        let writer = writer_for_path(&path).unwrap();
        let rows = timeline::write_csv(writer, &states).unwrap();
        assert_eq!(rows, 25);
    }

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        [
            "timestamp",
            "duration_s",
            "spin_km",
            "orbit_km",
            "galaxy_km",
            "cmb_km",
            "total_km"
        ]
    );

    let records: Vec<HashMap<String, String>> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records.len(), 25);

    let durations: Vec<f64> = records
        .iter()
        .map(|r| r["duration_s"].parse().unwrap())
        .collect();
    assert_eq!(durations[0], 0.0);
    assert_eq!(durations[24], 86_400.0);
    assert!(durations.windows(2).all(|w| w[1] > w[0]));

    let last_total: f64 = records[24]["total_km"].parse().unwrap();
    assert!((last_total - states[24].total_distance_km()).abs() < 1e-6 * last_total);
}

#[test]
fn json_snapshot_has_flattened_fields() {
    let state =
        compute_worldline_state("1990-06-15", 40.0, Some("1990-06-15T13:00:00".into())).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    {
        let writer = writer_for_path(&path).unwrap();
        snapshot::write_json(writer, &state).unwrap();
    }
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"duration_seconds\""));
    assert!(text.contains("\"total_distance_km\""));
    assert!(text.contains("\"cmb_reference\""));
}

#[test]
fn formatted_output_uses_units() {
    assert_eq!(format::format_distance(1_500.0, DistanceUnit::Km, 2), "1.50K km");
    assert_eq!(format::format_speed(1.0, SpeedUnit::KmPerHour, 0), "3600 km/h");
    let au = format::format_distance(149_597_870.7, DistanceUnit::Au, 2);
    assert!(au.starts_with("1.00"), "au = {}", au);
}

#[test]
fn shipped_profiles_load() {
    let profiles = load_profiles("configs/observers").unwrap();
    assert!(profiles.len() >= 2);

    let ada = find_profile(&profiles, "ada").unwrap();
    assert_eq!(ada.latitude_deg, 40.0);
    assert_eq!(ada.cmb_reference, CmbReference::Ssb);

    let grace = find_profile(&profiles, "GRACE").unwrap();
    assert_eq!(grace.cmb_reference, CmbReference::LocalGroup);
    assert_eq!(grace.display.distance_unit, DistanceUnit::Au);
    assert_eq!(grace.display.speed_unit, SpeedUnit::KmPerHour);

    let state = compute_worldline_state(
        &grace.birth_date,
        grace.latitude_deg,
        Some("2020-01-01".into()),
    )
    .unwrap();
    assert!(state.total_distance_km() > 0.0);
}
