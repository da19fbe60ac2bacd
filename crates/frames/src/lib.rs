//! Velocity and path-length models for the four nested reference frames.
//!
//! Every function here is pure: the only inputs are the observer's latitude,
//! the chosen CMB reference basis, and a duration in seconds. Frame models
//! are Tier A approximations (constant speeds, linear distance); the
//! [`model::FrameModel`] trait is the seam for higher-fidelity variants.

pub mod cmb;
pub mod ellipsoid;
pub mod frame;
pub mod galaxy;
pub mod model;
pub mod orbit;
pub mod spin;
pub mod uncertainty;

use thiserror::Error;

pub use cmb::{CmbReference, CmbVelocity, cmb_distance_km, compute_cmb_velocity};
pub use ellipsoid::{
    latitude_circumference_km, parallel_radius, parallel_radius_from_degrees,
    prime_vertical_radius,
};
pub use frame::{Frame, FrameReading, FrameVelocity, GalacticDirection};
pub use galaxy::{GalaxyVelocity, compute_galaxy_velocity, galaxy_distance_km};
pub use model::{FrameModel, Observer, TierACmb, TierAGalaxy, TierAOrbit, TierASpin};
pub use orbit::{OrbitVelocity, compute_orbit_velocity, orbit_distance_km};
pub use spin::{SpinVelocity, compute_spin_velocity, spin_distance_km, spin_velocity_kms};
pub use uncertainty::{
    DEFAULT_RELATIVE_THRESHOLD, is_significant_uncertainty,
    is_significant_uncertainty_with_threshold,
};

/// Errors raised by the frame models.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FrameError {
    #[error("latitude {0} is outside [-90, 90] degrees")]
    InvalidLatitude(f64),
}
