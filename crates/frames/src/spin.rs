//! Tangential speed from Earth's rotation.
//!
//! The angular velocity is treated as exactly constant, so the distance over
//! a duration is the arc swept along the latitude circle.

use serde::Serialize;
use worldline_core::constants::EARTH_ANGULAR_VELOCITY_RAD_S;
use worldline_core::units::ms_to_kms;

use crate::FrameError;
use crate::ellipsoid::parallel_radius_from_degrees;
use crate::frame::{Frame, FrameReading};

/// Rotation speed at the observer's latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpinVelocity {
    pub velocity_kms: f64,
    pub latitude_deg: f64,
    pub parallel_radius_m: f64,
}

impl FrameReading for SpinVelocity {
    fn frame(&self) -> Frame {
        Frame::Spin
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

/// Rotation speed for a latitude in degrees.
pub fn compute_spin_velocity(latitude_deg: f64) -> Result<SpinVelocity, FrameError> {
    let parallel_radius_m = parallel_radius_from_degrees(latitude_deg)?;
    let velocity_ms = EARTH_ANGULAR_VELOCITY_RAD_S * parallel_radius_m;
    Ok(SpinVelocity {
        velocity_kms: ms_to_kms(velocity_ms),
        latitude_deg,
        parallel_radius_m,
    })
}

pub fn spin_velocity_kms(latitude_deg: f64) -> Result<f64, FrameError> {
    Ok(compute_spin_velocity(latitude_deg)?.velocity_kms)
}

/// Arc length swept at `latitude_deg` over `duration_seconds` (km).
pub fn spin_distance_km(latitude_deg: f64, duration_seconds: f64) -> Result<f64, FrameError> {
    Ok(spin_velocity_kms(latitude_deg)? * duration_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equatorial_speed_is_about_465_m_s() {
        let v = spin_velocity_kms(0.0).unwrap();
        assert!((v - 0.4651).abs() < 1e-4, "v = {v}");
    }

    #[test]
    fn speed_is_symmetric_in_latitude() {
        for deg in [-90.0, -63.5, -40.0, -12.25, 0.0, 1.0, 45.0, 89.999] {
            let north = spin_velocity_kms(deg).unwrap();
            let south = spin_velocity_kms(-deg).unwrap();
            assert_eq!(north, south, "lat = {deg}");
        }
    }

    #[test]
    fn poles_do_not_move() {
        assert_eq!(spin_velocity_kms(90.0).unwrap(), 0.0);
        assert_eq!(spin_velocity_kms(-90.0).unwrap(), 0.0);
        assert_eq!(spin_distance_km(90.0, 1.0e9).unwrap(), 0.0);
    }

    #[test]
    fn spin_carries_latitude_metadata() {
        let spin = compute_spin_velocity(40.0).unwrap();
        assert_eq!(spin.latitude_deg, 40.0);
        assert!(spin.parallel_radius_m > 4.8e6 && spin.parallel_radius_m < 4.9e6);
        assert_eq!(spin.uncertainty_kms(), None);
        assert!(!spin.has_significant_uncertainty());
    }

    #[test]
    fn distance_is_linear_in_duration() {
        let one_hour = spin_distance_km(40.0, 3_600.0).unwrap();
        let two_hours = spin_distance_km(40.0, 7_200.0).unwrap();
        assert!((two_hours - 2.0 * one_hour).abs() < 1e-9);
        assert!((spin_distance_km(40.0, -3_600.0).unwrap() + one_hour).abs() < 1e-12);
    }

    #[test]
    fn invalid_latitude_propagates() {
        assert_eq!(
            spin_distance_km(-91.0, 10.0),
            Err(FrameError::InvalidLatitude(-91.0))
        );
    }
}
