//! headers/decode.rs
//!
//! Header decoding.
//!
//! The magic byte is checked before the version is read, so a foreign stream
//! is refused after consuming exactly one byte.

use std::io::Read;

use byteorder::ReadBytesExt;

use crate::codec::decode_int;
use crate::config::ArchiveConfig;
use crate::headers::types::StreamHeader;
use crate::types::{ArchiveError, HeaderFault, Result};

/// Read and validate the session header.
///
/// # Returns
/// - The header as read, or the configured one under `NO_HEADER`.
///
/// # Errors
/// - `BadStreamHeader` on magic mismatch, zero version, or a version newer
///   than `config.version`.
/// - A malformed version field is reported as `BadStreamHeader` too.
pub fn begin_read<R: Read>(r: &mut R, config: &ArchiveConfig) -> Result<StreamHeader> {
    if config.no_header() {
        tracing::debug!("header skipped by NO_HEADER");
        return Ok(StreamHeader::for_config(config));
    }

    let magic = r.read_i8()?;
    if magic != config.magic {
        let fault = HeaderFault::BadMagic { have: magic, need: config.magic };
        tracing::warn!(%fault, "stream header rejected");
        return Err(fault.into());
    }

    let version: u16 = match decode_int(r) {
        Ok(v) => v,
        Err(ArchiveError::Io(e)) => return Err(ArchiveError::Io(e)),
        Err(_) => {
            let fault = HeaderFault::MalformedVersion;
            tracing::warn!(%fault, "stream header rejected");
            return Err(fault.into());
        }
    };

    let header = StreamHeader { magic, version };
    if let Err(fault) = header.check_version(config.version) {
        tracing::warn!(%fault, "stream header rejected");
        return Err(fault.into());
    }

    tracing::debug!(version, "stream header accepted");
    Ok(header)
}
