//! Worldline aggregation: dates in, one snapshot across all four frames out.

pub mod dates;
pub mod timeline;
pub mod worldline;

pub use facade::*;

mod facade;
