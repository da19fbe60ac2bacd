//! Galactocentric orbital speed. All values are empirical constants.

use serde::Serialize;
use worldline_core::constants::{
    GALACTIC_CENTER_DISTANCE_LY, GALACTIC_ORBITAL_PERIOD_YEARS, GALACTIC_VELOCITY_KMS,
    GALACTIC_VELOCITY_UNCERTAINTY_KMS,
};

use crate::frame::{Frame, FrameReading};
use crate::uncertainty::is_significant_uncertainty;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GalaxyVelocity {
    pub velocity_kms: f64,
    pub uncertainty_kms: f64,
    pub has_significant_uncertainty: bool,
    pub galactic_center_distance_ly: f64,
    pub orbital_period_years: f64,
}

impl FrameReading for GalaxyVelocity {
    fn frame(&self) -> Frame {
        Frame::Galaxy
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

pub fn compute_galaxy_velocity() -> GalaxyVelocity {
    GalaxyVelocity {
        velocity_kms: GALACTIC_VELOCITY_KMS,
        uncertainty_kms: GALACTIC_VELOCITY_UNCERTAINTY_KMS,
        has_significant_uncertainty: is_significant_uncertainty(
            GALACTIC_VELOCITY_KMS,
            Some(GALACTIC_VELOCITY_UNCERTAINTY_KMS),
        ),
        galactic_center_distance_ly: GALACTIC_CENTER_DISTANCE_LY,
        orbital_period_years: GALACTIC_ORBITAL_PERIOD_YEARS,
    }
}

pub fn galaxy_distance_km(duration_seconds: f64) -> f64 {
    GALACTIC_VELOCITY_KMS * duration_seconds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn galaxy_uncertainty_is_always_flagged() {
        let galaxy = compute_galaxy_velocity();
        assert_eq!(galaxy.velocity_kms, 220.0);
        assert_eq!(galaxy.uncertainty_kms(), Some(15.0));
        assert!(galaxy.has_significant_uncertainty);
    }

    #[test]
    fn one_hour_around_the_galaxy() {
        assert_eq!(galaxy_distance_km(3_600.0), 792_000.0);
    }
}
