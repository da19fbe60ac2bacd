//! Strategy seam between the aggregator and the per-frame formulas.
//!
//! The `TierA*` models wrap the closed-form functions in this crate. A model
//! with more physics (for example integrating the true orbital speed over
//! the elapsed interval) implements [`FrameModel`] with the same output type
//! and overrides [`FrameModel::distance_km`].

use crate::FrameError;
use crate::cmb::{CmbReference, CmbVelocity, compute_cmb_velocity};
use crate::frame::FrameReading;
use crate::galaxy::{GalaxyVelocity, compute_galaxy_velocity};
use crate::orbit::{OrbitVelocity, compute_orbit_velocity};
use crate::spin::{SpinVelocity, compute_spin_velocity};

/// Inputs shared by every frame model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub latitude_deg: f64,
    pub cmb_reference: CmbReference,
}

impl Observer {
    pub fn new(latitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            cmb_reference: CmbReference::default(),
        }
    }
}

/// A velocity model for one reference frame.
pub trait FrameModel {
    type Output: FrameReading;

    fn velocity(&self, observer: &Observer) -> Result<Self::Output, FrameError>;

    /// Path length over `duration_seconds` (km). Linear in the duration
    /// unless a model overrides it.
    fn distance_km(&self, velocity: &Self::Output, duration_seconds: f64) -> f64 {
        velocity.velocity_kms() * duration_seconds
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TierASpin;

impl FrameModel for TierASpin {
    type Output = SpinVelocity;

    fn velocity(&self, observer: &Observer) -> Result<SpinVelocity, FrameError> {
        compute_spin_velocity(observer.latitude_deg)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TierAOrbit;

impl FrameModel for TierAOrbit {
    type Output = OrbitVelocity;

    fn velocity(&self, _observer: &Observer) -> Result<OrbitVelocity, FrameError> {
        Ok(compute_orbit_velocity())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TierAGalaxy;

impl FrameModel for TierAGalaxy {
    type Output = GalaxyVelocity;

    fn velocity(&self, _observer: &Observer) -> Result<GalaxyVelocity, FrameError> {
        Ok(compute_galaxy_velocity())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TierACmb;

impl FrameModel for TierACmb {
    type Output = CmbVelocity;

    fn velocity(&self, observer: &Observer) -> Result<CmbVelocity, FrameError> {
        Ok(compute_cmb_velocity(observer.cmb_reference))
    }
}
