//! Archive sessions.
//!
//! Responsibilities:
//! - Run the stream framer once at session start
//! - Route each `write_<T>`/`read_<T>` call to the matching transcoder
//! - Apply the session policy (inf/nan, denormals, length limits)
//!
//! Non-responsibilities:
//! - Aggregate traversal
//! - Object tracking
//! - Resynchronization after errors

pub mod traits;
pub mod writer;
pub mod reader;

pub use traits::{InputArchive, OutputArchive, Primitive};
pub use writer::ArchiveWriter;
pub use reader::ArchiveReader;
