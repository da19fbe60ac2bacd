//! Worldline calculator: how far an observer has moved since birth.
//!
//! The physics lives in the member crates; this facade re-exports them so
//! front-ends (the CLI here, a GUI or web layer elsewhere) depend on one
//! crate.

pub use worldline_almanac as almanac;
pub use worldline_config as config;
pub use worldline_core::{constants, time, units};
pub use worldline_export as export;
pub use worldline_frames as frames;
pub use worldline_state as state;

pub use worldline_state::{
    AgeDuration, CmbReference, DateError, Frame, FrameReading, WorldlineCalculator,
    WorldlineError, WorldlineState, compute_worldline_state,
};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
