//! headers/encode.rs
//!
//! Header encoding.
//!
//! Layout:
//!
//! ```text
//! [ magic (1, raw) ]
//! [ version (wire integer, declared width 2) ]
//! ```

use std::io::Write;

use byteorder::WriteBytesExt;

use crate::codec::encode_int;
use crate::config::ArchiveConfig;
use crate::headers::types::StreamHeader;
use crate::types::Result;

/// Write the session header for `config`. Returns the bytes written
/// (0 under `NO_HEADER`).
///
/// Only sink I/O can fail.
pub fn begin_write<W: Write>(w: &mut W, config: &ArchiveConfig) -> Result<usize> {
    if config.no_header() {
        tracing::debug!("header suppressed by NO_HEADER");
        return Ok(0);
    }

    let header = StreamHeader::for_config(config);
    let written = encode_header(w, &header)?;
    tracing::debug!(magic = header.magic, version = header.version, "stream header written");
    Ok(written)
}

#[inline]
pub fn encode_header<W: Write>(w: &mut W, header: &StreamHeader) -> Result<usize> {
    w.write_i8(header.magic)?;
    let n = encode_int(w, header.version)?;
    Ok(1 + n)
}
