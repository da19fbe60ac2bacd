//! WGS84 ellipsoid geometry for a surface observer.
//!
//! Height above the ellipsoid is taken as zero throughout. The parallel
//! radius is the distance from the rotation axis, i.e. the radius of the
//! circle the observer sweeps out in one sidereal day.

use std::f64::consts::PI;

use worldline_core::constants::{WGS84_ECCENTRICITY_SQUARED, WGS84_SEMI_MAJOR_AXIS_M};
use worldline_core::units::m_to_km;

use crate::FrameError;

/// Radius of curvature in the prime vertical, `N(φ) = a / √(1 − e²·sin²φ)` (m).
pub fn prime_vertical_radius(latitude_rad: f64) -> f64 {
    let sin_lat = latitude_rad.sin();
    WGS84_SEMI_MAJOR_AXIS_M / (1.0 - WGS84_ECCENTRICITY_SQUARED * sin_lat * sin_lat).sqrt()
}

/// Distance from the rotation axis, `N(φ)·cos φ` (m).
pub fn parallel_radius(latitude_rad: f64) -> f64 {
    prime_vertical_radius(latitude_rad) * latitude_rad.cos()
}

/// Parallel radius for a latitude in degrees (m).
///
/// Both poles are valid inputs and return exactly zero.
///
/// # Errors
///
/// [`FrameError::InvalidLatitude`] when the latitude lies outside
/// `[-90, 90]` or is NaN.
pub fn parallel_radius_from_degrees(latitude_deg: f64) -> Result<f64, FrameError> {
    validate_latitude(latitude_deg)?;
    if latitude_deg.abs() == 90.0 {
        // cos(π/2) is not exactly zero in floating point
        return Ok(0.0);
    }
    Ok(parallel_radius(latitude_deg.to_radians()))
}

/// Circumference of the latitude circle (km).
pub fn latitude_circumference_km(latitude_deg: f64) -> Result<f64, FrameError> {
    let radius_m = parallel_radius_from_degrees(latitude_deg)?;
    Ok(m_to_km(2.0 * PI * radius_m))
}

pub(crate) fn validate_latitude(latitude_deg: f64) -> Result<(), FrameError> {
    if (-90.0..=90.0).contains(&latitude_deg) {
        Ok(())
    } else {
        Err(FrameError::InvalidLatitude(latitude_deg))
    }
}
