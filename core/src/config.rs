//! config.rs
//! Session policy shared by writer and reader.
//!
//! Both ends must be configured identically: flags are never written to the
//! stream, only magic and version are.

use serde::{Deserialize, Serialize};

use crate::constants::{flag_bits, ARCHIVE_VERSION, DEFAULT_MAX_SEQUENCE_LEN, MAGIC_BYTE};
use crate::types::{ArchiveError, Result};

bitflags::bitflags! {
    /// Archive policy flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ArchiveFlags: u32 {
        /// Neither write nor expect the magic/version header.
        const NO_HEADER = flag_bits::NO_HEADER;

        /// Refuse infinities and NaNs in both directions.
        const NO_INFNAN = flag_bits::NO_INFNAN;

        /// Decoding target cannot hold denormalized floats.
        const NO_DENORMALS = flag_bits::NO_DENORMALS;
    }
}

impl Default for ArchiveFlags {
    fn default() -> Self {
        ArchiveFlags::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Expected/emitted first byte.
    pub magic: i8,

    /// Version written by a writer; highest version accepted by a reader.
    pub version: u16,

    pub flags: ArchiveFlags,

    /// Largest element count a reader will allocate for.
    pub max_sequence_len: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            magic: MAGIC_BYTE,
            version: ARCHIVE_VERSION,
            flags: ArchiveFlags::empty(),
            max_sequence_len: DEFAULT_MAX_SEQUENCE_LEN,
        }
    }
}

impl ArchiveConfig {
    pub fn new(flags: ArchiveFlags) -> Self {
        Self { flags, ..Default::default() }
    }

    pub fn with_flags(mut self, flags: ArchiveFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    pub fn with_max_sequence_len(mut self, max: u64) -> Self {
        self.max_sequence_len = max;
        self
    }

    #[inline]
    pub fn no_infnan(&self) -> bool {
        self.flags.contains(ArchiveFlags::NO_INFNAN)
    }

    #[inline]
    pub fn no_header(&self) -> bool {
        self.flags.contains(ArchiveFlags::NO_HEADER)
    }

    #[inline]
    pub fn allows_denormals(&self) -> bool {
        !self.flags.contains(ArchiveFlags::NO_DENORMALS)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version == 0 {
            return Err(ArchiveError::Malformed("config version must be non-zero".into()));
        }
        // Lowering the version is allowed, raising it past what this build decodes is not.
        if self.version > ARCHIVE_VERSION {
            return Err(ArchiveError::Malformed(format!(
                "config version {} exceeds supported version {}",
                self.version, ARCHIVE_VERSION
            )));
        }
        if self.max_sequence_len == 0 {
            return Err(ArchiveError::Malformed("config max_sequence_len must be non-zero".into()));
        }
        Ok(())
    }

    /// Load a policy shared out-of-band between peers. Missing fields take defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let config: ArchiveConfig = serde_json::from_str(s)
            .map_err(|e| ArchiveError::Malformed(format!("config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ArchiveError::Malformed(format!("config: {}", e)))
    }
}
