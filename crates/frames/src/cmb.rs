//! Motion relative to the Cosmic Microwave Background rest frame.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use worldline_core::constants::{
    CMB_LOCAL_GROUP_GALACTIC_LATITUDE_DEG, CMB_LOCAL_GROUP_GALACTIC_LONGITUDE_DEG,
    CMB_LOCAL_GROUP_VELOCITY_KMS, CMB_LOCAL_GROUP_VELOCITY_UNCERTAINTY_KMS,
    CMB_SSB_GALACTIC_LATITUDE_DEG, CMB_SSB_GALACTIC_LONGITUDE_DEG, CMB_SSB_VELOCITY_KMS,
    CMB_SSB_VELOCITY_UNCERTAINTY_KMS,
};

use crate::frame::{Frame, FrameReading, GalacticDirection};
use crate::uncertainty::is_significant_uncertainty;

/// Which body's motion against the CMB is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CmbReference {
    /// Solar System Barycenter.
    #[default]
    Ssb,
    LocalGroup,
}

impl CmbReference {
    pub fn as_str(self) -> &'static str {
        match self {
            CmbReference::Ssb => "ssb",
            CmbReference::LocalGroup => "local-group",
        }
    }

    /// Dipole speed for this basis (km/s).
    pub fn velocity_kms(self) -> f64 {
        match self {
            CmbReference::Ssb => CMB_SSB_VELOCITY_KMS,
            CmbReference::LocalGroup => CMB_LOCAL_GROUP_VELOCITY_KMS,
        }
    }

    pub fn uncertainty_kms(self) -> f64 {
        match self {
            CmbReference::Ssb => CMB_SSB_VELOCITY_UNCERTAINTY_KMS,
            CmbReference::LocalGroup => CMB_LOCAL_GROUP_VELOCITY_UNCERTAINTY_KMS,
        }
    }

    pub fn direction(self) -> GalacticDirection {
        match self {
            CmbReference::Ssb => GalacticDirection {
                longitude_deg: CMB_SSB_GALACTIC_LONGITUDE_DEG,
                latitude_deg: CMB_SSB_GALACTIC_LATITUDE_DEG,
            },
            CmbReference::LocalGroup => GalacticDirection {
                longitude_deg: CMB_LOCAL_GROUP_GALACTIC_LONGITUDE_DEG,
                latitude_deg: CMB_LOCAL_GROUP_GALACTIC_LATITUDE_DEG,
            },
        }
    }
}

impl fmt::Display for CmbReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a CMB reference identifier other than `ssb` or `local-group`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown CMB reference '{0}' (expected 'ssb' or 'local-group')")]
pub struct UnknownCmbReference(pub String);

impl FromStr for CmbReference {
    type Err = UnknownCmbReference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ssb" => Ok(CmbReference::Ssb),
            "local-group" => Ok(CmbReference::LocalGroup),
            other => Err(UnknownCmbReference(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CmbVelocity {
    pub velocity_kms: f64,
    pub uncertainty_kms: f64,
    pub has_significant_uncertainty: bool,
    pub reference: CmbReference,
    pub direction: GalacticDirection,
}

impl FrameReading for CmbVelocity {
    fn frame(&self) -> Frame {
        Frame::Cmb
    }

    fn velocity_kms(&self) -> f64 {
        self.velocity_kms
    }

    fn uncertainty_kms(&self) -> Option<f64> {
        Some(self.uncertainty_kms)
    }

    fn has_significant_uncertainty(&self) -> bool {
        self.has_significant_uncertainty
    }
}

pub fn compute_cmb_velocity(reference: CmbReference) -> CmbVelocity {
    let velocity_kms = reference.velocity_kms();
    let uncertainty_kms = reference.uncertainty_kms();
    CmbVelocity {
        velocity_kms,
        uncertainty_kms,
        has_significant_uncertainty: is_significant_uncertainty(
            velocity_kms,
            Some(uncertainty_kms),
        ),
        reference,
        direction: reference.direction(),
    }
}

pub fn cmb_distance_km(duration_seconds: f64, reference: CmbReference) -> f64 {
    reference.velocity_kms() * duration_seconds
}
