//! Moon phase and season lookups shown next to the worldline.
//!
//! Both are deliberately coarse: the moon uses a mean synodic month from a
//! single reference new moon, and seasons switch on fixed calendar dates
//! rather than on computed equinoxes and solstices. Neither feeds the frame
//! models.

pub mod moon;
pub mod season;

pub use moon::{MoonPhase, MoonPhaseName, moon_phase};
pub use season::{Hemisphere, Season, season};
