//! Primitive value transcoders.
//!
//! Responsibilities:
//! - Integers of 1..8 bytes to/from the variable-width wire form
//! - f32/f64 to/from the portable fixed layout
//!
//! Non-responsibilities:
//! - Stream header
//! - Sequences, strings
//! - Session state

pub mod integer;
pub mod float;

pub use integer::{decode_int, encode_int, encoded_len, magnitude_len, PortableInt};
pub use float::{decode_float, encode_float, FloatClass, FloatParts, FloatPolicy, PortableFloat};
