use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn observer_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../configs/observers")
}

#[test]
fn snapshot_prints_every_frame_and_total() {
    Command::cargo_bin("worldline")
        .unwrap()
        .args([
            "--birth",
            "1990-06-15",
            "--latitude",
            "40",
            "--target",
            "1990-06-15T13:00:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Earth rotation"))
        .stdout(predicate::str::contains("Motion against the CMB"))
        .stdout(predicate::str::contains("Total"))
        .stdout(predicate::str::contains("Season"));
}

#[test]
fn negative_latitude_is_accepted() {
    Command::cargo_bin("worldline")
        .unwrap()
        .args([
            "--birth",
            "2000-01-01",
            "--latitude",
            "-33.9",
            "--target",
            "2001-01-01",
            "--cmb",
            "local-group",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("local-group"));
}

#[test]
fn out_of_range_latitude_fails() {
    Command::cargo_bin("worldline")
        .unwrap()
        .args(["--birth", "2000-01-01", "--latitude", "91"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("latitude"));
}

#[test]
fn missing_birth_fails() {
    Command::cargo_bin("worldline")
        .unwrap()
        .args(["--latitude", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--birth"));
}

#[test]
fn profile_supplies_observer() {
    Command::cargo_bin("worldline")
        .unwrap()
        .arg("--profile")
        .arg("ada")
        .arg("--config")
        .arg(observer_catalog())
        .args(["--target", "2020-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1990-06-15"));
}

#[test]
fn unknown_profile_fails() {
    Command::cargo_bin("worldline")
        .unwrap()
        .arg("--profile")
        .arg("nobody")
        .arg("--config")
        .arg(observer_catalog())
        .assert()
        .failure()
        .stderr(predicate::str::contains("nobody"));
}

#[test]
fn json_snapshot_is_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    Command::cargo_bin("worldline")
        .unwrap()
        .args(["--birth", "1990-06-15", "--latitude", "0", "--target", "2000-01-01"])
        .arg("--json")
        .arg(&path)
        .assert()
        .success();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"total_distance_km\""));
}

#[test]
fn json_on_stdout_is_the_only_output() {
    let output = Command::cargo_bin("worldline")
        .unwrap()
        .args([
            "--birth",
            "1990-06-15",
            "--latitude",
            "40",
            "--target",
            "1990-06-15T13:00:00",
            "--json",
            "-",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["duration_seconds"], 3_600.0);
    assert_eq!(doc["cmb_reference"], "ssb");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Total"));
}

#[test]
fn timeline_writes_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("timeline.csv");
    Command::cargo_bin("worldline_timeline")
        .unwrap()
        .args([
            "--birth",
            "1990-06-15",
            "--latitude",
            "40",
            "--target",
            "1990-06-16",
            "--steps",
            "4",
        ])
        .arg("--output")
        .arg(&path)
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("timestamp,duration_s,spin_km,orbit_km,galaxy_km,cmb_km,total_km")
    );
    assert_eq!(lines.count(), 5);
}

#[test]
fn timeline_rejects_zero_steps() {
    Command::cargo_bin("worldline_timeline")
        .unwrap()
        .args(["--birth", "1990-06-15", "--latitude", "40", "--steps", "0"])
        .assert()
        .failure();
}
