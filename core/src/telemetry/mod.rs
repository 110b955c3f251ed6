//! telemetry/mod.rs
//! Byte and value accounting for archive sessions.

pub mod counters;

pub use counters::*;
