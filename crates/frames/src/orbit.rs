//! Heliocentric orbital speed.
//!
//! Distance uses the mean speed only; the instantaneous speed along the
//! ellipse is not integrated.

use serde::Serialize;
use worldline_core::constants::{EARTH_ORBITAL_ECCENTRICITY, EARTH_ORBITAL_VELOCITY_KMS};

use crate::frame::{Frame, FrameReading};

/// Mean orbital speed plus the extremes implied by the eccentricity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitVelocity {
    pub velocity_kms: f64,
    pub aphelion_velocity_kms: f64,
    pub perihelion_velocity_kms: f64,
    pub eccentricity: f64,
}

impl FrameReading for OrbitVelocity {
    fn frame(&self) -> Frame {
        Frame::Orbit
    }

    fn velocity_kms(&self) -> f64 {
        self.velocity_kms
    }

    fn uncertainty_kms(&self) -> Option<f64> {
        None
    }

    fn has_significant_uncertainty(&self) -> bool {
        false
    }
}

pub fn compute_orbit_velocity() -> OrbitVelocity {
    let v = EARTH_ORBITAL_VELOCITY_KMS;
    let e = EARTH_ORBITAL_ECCENTRICITY;
    OrbitVelocity {
        velocity_kms: v,
        aphelion_velocity_kms: v * ((1.0 - e) / (1.0 + e)).sqrt(),
        perihelion_velocity_kms: v * ((1.0 + e) / (1.0 - e)).sqrt(),
        eccentricity: e,
    }
}

pub fn orbit_distance_km(duration_seconds: f64) -> f64 {
    EARTH_ORBITAL_VELOCITY_KMS * duration_seconds
}
