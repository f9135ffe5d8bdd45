//! Data structures shared between collectors and the renderer

pub mod status;

pub use status::{BatteryReading, StatusLine};
