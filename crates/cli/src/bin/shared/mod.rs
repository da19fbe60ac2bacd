//! Argument handling shared by the worldline binaries.

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Args, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use worldline::config::{DisplayConfig, find_profile, load_profiles};
use worldline::frames::CmbReference;

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Copy, Clone, ValueEnum, Debug)]
pub enum CmbMode {
    Ssb,
    LocalGroup,
}

impl From<CmbMode> for CmbReference {
    fn from(mode: CmbMode) -> Self {
        match mode {
            CmbMode::Ssb => CmbReference::Ssb,
            CmbMode::LocalGroup => CmbReference::LocalGroup,
        }
    }
}

/// Observer selection: explicit flags, a named profile, or both (flags win).
#[derive(Args, Debug)]
pub struct ObserverArgs {
    /// Birth date (YYYY-MM-DD is read as local noon, or an ISO-8601 date-time)
    #[arg(long)]
    pub birth: Option<String>,

    /// Geodetic latitude in degrees, -90 to 90
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    /// Target instant (defaults to now)
    #[arg(long)]
    pub target: Option<String>,

    /// CMB reference basis
    #[arg(long, value_enum)]
    pub cmb: Option<CmbMode>,

    /// Observer profile name from the config catalog (case-insensitive)
    #[arg(long)]
    pub profile: Option<String>,

    /// Observer catalog: YAML list, TOML file, or directory of TOML files
    #[arg(long, default_value = "configs/observers")]
    pub config: PathBuf,
}

/// Observer after merging flags over the selected profile.
#[derive(Debug, Clone)]
pub struct ResolvedObserver {
    pub birth: String,
    pub latitude_deg: f64,
    pub target: Option<String>,
    pub cmb_reference: CmbReference,
    pub display: DisplayConfig,
}

impl ObserverArgs {
    pub fn resolve(&self) -> anyhow::Result<ResolvedObserver> {
        let profile = match &self.profile {
            Some(name) => {
                let profiles = load_profiles(&self.config).with_context(|| {
                    format!("loading observer catalog {}", self.config.display())
                })?;
                Some(find_profile(&profiles, name)?)
            }
            None => None,
        };

        let birth = self
            .birth
            .clone()
            .or_else(|| profile.as_ref().map(|p| p.birth_date.clone()))
            .ok_or_else(|| anyhow!("--birth is required unless --profile is given"))?;
        let latitude_deg = self
            .latitude
            .or_else(|| profile.as_ref().map(|p| p.latitude_deg))
            .ok_or_else(|| anyhow!("--latitude is required unless --profile is given"))?;
        let target = self
            .target
            .clone()
            .or_else(|| profile.as_ref().and_then(|p| p.target_date.clone()));
        let cmb_reference = self
            .cmb
            .map(CmbReference::from)
            .or_else(|| profile.as_ref().map(|p| p.cmb_reference))
            .unwrap_or_default();
        let display = profile.as_ref().map(|p| p.display).unwrap_or_default();

        debug!(%birth, latitude_deg, ?target, %cmb_reference, "resolved observer");
        Ok(ResolvedObserver {
            birth,
            latitude_deg,
            target,
            cmb_reference,
            display,
        })
    }
}
