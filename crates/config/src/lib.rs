//! Observer profiles and display settings for the Worldline calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use worldline_core::units::{DistanceUnit, SpeedUnit};
use worldline_frames::{CmbReference, DEFAULT_RELATIVE_THRESHOLD};

/// A named observer: where they stand and when they were born.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ObserverProfile {
    pub name: String,
    /// Birth date as accepted by the date parser (`YYYY-MM-DD` or ISO-like).
    pub birth_date: String,
    pub latitude_deg: f64,
    /// Fixed target instant; the current time when absent.
    #[serde(default)]
    pub target_date: Option<String>,
    #[serde(default)]
    pub cmb_reference: CmbReference,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Presentation preferences applied by front-ends.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub distance_unit: DistanceUnit,
    pub speed_unit: SpeedUnit,
    pub uncertainty_threshold: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            distance_unit: DistanceUnit::Km,
            speed_unit: SpeedUnit::KmPerSecond,
            uncertainty_threshold: DEFAULT_RELATIVE_THRESHOLD,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("observer profile '{0}' not found")]
    ProfileNotFound(String),
}

/// Load observer profiles from a YAML list, a single TOML file, or a
/// directory of TOML files (read in file-name order).
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<ObserverProfile>, ConfigError> {
    let mut profiles: Vec<ObserverProfile> = load_records(path.as_ref())?;
    for profile in &mut profiles {
        sanitize_display(profile);
    }
    debug!(count = profiles.len(), path = %path.as_ref().display(), "loaded observer profiles");
    Ok(profiles)
}

/// Case-insensitive lookup by profile name.
pub fn find_profile(
    profiles: &[ObserverProfile],
    name: &str,
) -> Result<ObserverProfile, ConfigError> {
    let upper = name.to_uppercase();
    profiles
        .iter()
        .find(|p| p.name.to_uppercase() == upper)
        .cloned()
        .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))
}

fn sanitize_display(profile: &mut ObserverProfile) {
    let threshold = profile.display.uncertainty_threshold;
    if !threshold.is_finite() || threshold < 0.0 {
        warn!(
            profile = %profile.name,
            threshold,
            "invalid uncertainty threshold, using default"
        );
        profile.display.uncertainty_threshold = DEFAULT_RELATIVE_THRESHOLD;
    }
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const YAML: &str = r#"
- name: Ada
  birth_date: "1990-06-15"
  latitude_deg: 40.0
- name: Grace
  birth_date: "1985-12-09T08:30:00"
  latitude_deg: -33.9
  target_date: "2020-01-01"
  cmb_reference: local-group
  display:
    distance_unit: light-years
    speed_unit: km-per-hour
"#;

    #[test]
    fn yaml_list_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("observers.yaml");
        fs::write(&path, YAML).unwrap();

        let profiles = load_profiles(&path).unwrap();
        assert_eq!(profiles.len(), 2);

        let ada = &profiles[0];
        assert_eq!(ada.cmb_reference, CmbReference::Ssb);
        assert_eq!(ada.target_date, None);
        assert_eq!(ada.display, DisplayConfig::default());

        let grace = &profiles[1];
        assert_eq!(grace.cmb_reference, CmbReference::LocalGroup);
        assert_eq!(grace.display.distance_unit, DistanceUnit::LightYears);
        assert_eq!(grace.display.speed_unit, SpeedUnit::KmPerHour);
        assert_eq!(grace.display.uncertainty_threshold, DEFAULT_RELATIVE_THRESHOLD);
    }

    #[test]
    fn toml_directory_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("b.toml"),
            "name = \"Bea\"\nbirth_date = \"2001-01-01\"\nlatitude_deg = 10.0\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("a.toml"),
            r#"
name = "Abe"
birth_date = "1970-01-01"
latitude_deg = 60.0

[display]
distance_unit = "au"
"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let profiles = load_profiles(dir.path()).unwrap();
        let names: Vec<_> = profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Abe", "Bea"]);
        assert_eq!(profiles[0].display.distance_unit, DistanceUnit::Au);
    }

    #[test]
    fn unknown_cmb_reference_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(
            &path,
            r#"
name = "X"
birth_date = "2000-01-01"
latitude_deg = 0.0
cmb_reference = "galactic"
"#,
        )
        .unwrap();
        assert!(matches!(load_profiles(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn negative_threshold_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neg.toml");
        fs::write(
            &path,
            r#"
name = "N"
birth_date = "2000-01-01"
latitude_deg = 0.0

[display]
uncertainty_threshold = -1.0
"#,
        )
        .unwrap();
        let profiles = load_profiles(&path).unwrap();
        assert_eq!(
            profiles[0].display.uncertainty_threshold,
            DEFAULT_RELATIVE_THRESHOLD
        );
    }

    #[test]
    fn profiles_are_found_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("observers.yaml");
        fs::write(&path, YAML).unwrap();
        let profiles = load_profiles(&path).unwrap();

        assert_eq!(find_profile(&profiles, "grace").unwrap().name, "Grace");
        assert!(matches!(
            find_profile(&profiles, "Linus"),
            Err(ConfigError::ProfileNotFound(name)) if name == "Linus"
        ));
        assert!(matches!(
            load_profiles(dir.path().join("missing.yaml")),
            Err(ConfigError::Io(_))
        ));
    }
}
