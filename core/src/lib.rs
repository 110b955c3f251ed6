//! archive-core
//!
//! Portable binary archive codec.
//! Byte-exact across host byte order, word size and float layout.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

// Codec layers
pub mod codec;
pub mod headers;
pub mod archive;

pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::archive::{ArchiveReader, ArchiveWriter, InputArchive, OutputArchive, Primitive};
    pub use crate::config::{ArchiveConfig, ArchiveFlags};
    pub use crate::types::{AbnormalValue, ArchiveError, ErrorKind, HeaderFault, Result};
}
