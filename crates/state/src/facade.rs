//! Re-exported APIs for consumers of the state crate.

pub use crate::dates::{
    AgeDuration, DateError, DateInput, breakdown_duration, compute_duration_seconds,
    duration_between, format_date_input, parse_date_input,
};
pub use crate::timeline::sample_timeline;
pub use crate::worldline::{
    FrameDistance, FrameDistances, FrameVelocities, WorldlineCalculator, WorldlineError,
    WorldlineState, compute_worldline_state,
};
pub use worldline_frames::{CmbReference, Frame, FrameReading, FrameVelocity};
