//! headers/types.rs
//! Stream header type and validation.
//!
//! Notes:
//! - The magic is a single raw byte so a gross format mismatch is caught on the
//!   first read.
//! - The version travels as a width-2 wire integer, like any other `u16`.
//! - Older versions are accepted; newer ones are refused.

use crate::config::ArchiveConfig;
use crate::constants::{ARCHIVE_VERSION, MAGIC_BYTE};
use crate::types::HeaderFault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamHeader {
    pub magic: i8,
    pub version: u16,
}

impl Default for StreamHeader {
    fn default() -> Self {
        Self { magic: MAGIC_BYTE, version: ARCHIVE_VERSION }
    }
}

impl StreamHeader {
    /// Header a writer emits for `config`.
    pub fn for_config(config: &ArchiveConfig) -> Self {
        Self { magic: config.magic, version: config.version }
    }

    /// Bytes this header occupies on the wire.
    pub fn encoded_len(&self) -> usize {
        1 + crate::codec::encoded_len(self.version)
    }

    /// Version check against the highest version the reader understands.
    pub fn check_version(&self, max: u16) -> Result<(), HeaderFault> {
        if self.version == 0 {
            return Err(HeaderFault::ZeroVersion);
        }
        if self.version > max {
            return Err(HeaderFault::UnsupportedVersion { have: self.version, max });
        }
        Ok(())
    }
}
