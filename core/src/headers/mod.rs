//! headers/mod.rs
//! Stream framer: magic byte and archive version at session start.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
