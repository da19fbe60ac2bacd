//! Frame identifiers and the tagged union over per-frame velocity readings.

use std::fmt;

use serde::Serialize;

use crate::cmb::CmbVelocity;
use crate::galaxy::GalaxyVelocity;
use crate::orbit::OrbitVelocity;
use crate::spin::SpinVelocity;

/// The four nested reference frames, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    Spin,
    Orbit,
    Galaxy,
    Cmb,
}

impl Frame {
    pub const ALL: [Frame; 4] = [Frame::Spin, Frame::Orbit, Frame::Galaxy, Frame::Cmb];

    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Frame::Spin => "spin",
            Frame::Orbit => "orbit",
            Frame::Galaxy => "galaxy",
            Frame::Cmb => "cmb",
        }
    }

    /// Human-readable description of what the frame measures motion against.
    pub fn label(self) -> &'static str {
        match self {
            Frame::Spin => "Earth rotation",
            Frame::Orbit => "Orbit around the Sun",
            Frame::Galaxy => "Orbit around the galactic centre",
            Frame::Cmb => "Motion against the CMB",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform read access to a frame's velocity payload.
pub trait FrameReading {
    fn frame(&self) -> Frame;
    /// Speed in this frame (km/s), never negative.
    fn velocity_kms(&self) -> f64;
    /// One-sigma measurement uncertainty, absent for exact geometric values.
    fn uncertainty_kms(&self) -> Option<f64>;
    fn has_significant_uncertainty(&self) -> bool;
}

/// Direction of motion in galactic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GalacticDirection {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
}

/// Velocity reading for any frame, each variant carrying its own metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "frame", rename_all = "lowercase")]
pub enum FrameVelocity {
    Spin(SpinVelocity),
    Orbit(OrbitVelocity),
    Galaxy(GalaxyVelocity),
    Cmb(CmbVelocity),
}

impl FrameVelocity {
    fn reading(&self) -> &dyn FrameReading {
        match self {
            FrameVelocity::Spin(v) => v,
            FrameVelocity::Orbit(v) => v,
            FrameVelocity::Galaxy(v) => v,
            FrameVelocity::Cmb(v) => v,
        }
    }
}

impl FrameReading for FrameVelocity {
    fn frame(&self) -> Frame {
        self.reading().frame()
    }

    fn velocity_kms(&self) -> f64 {
        self.reading().velocity_kms()
    }

    fn uncertainty_kms(&self) -> Option<f64> {
        self.reading().uncertainty_kms()
    }

    fn has_significant_uncertainty(&self) -> bool {
        self.reading().has_significant_uncertainty()
    }
}

impl From<SpinVelocity> for FrameVelocity {
    fn from(v: SpinVelocity) -> Self {
        FrameVelocity::Spin(v)
    }
}

impl From<OrbitVelocity> for FrameVelocity {
    fn from(v: OrbitVelocity) -> Self {
        FrameVelocity::Orbit(v)
    }
}

impl From<GalaxyVelocity> for FrameVelocity {
    fn from(v: GalaxyVelocity) -> Self {
        FrameVelocity::Galaxy(v)
    }
}

impl From<CmbVelocity> for FrameVelocity {
    fn from(v: CmbVelocity) -> Self {
        FrameVelocity::Cmb(v)
    }
}
