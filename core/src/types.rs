use std::fmt;
use std::io;

use num_enum::TryFromPrimitive;
use thiserror::Error;

/// Stable error kind registry.
/// Codes are part of the public diagnostics surface; never renumber.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum ErrorKind {
    BadStreamHeader      = 0x0001,
    IntegerOverflow      = 0x0002,
    NegativeIntoUnsigned = 0x0003,
    IllegalFloatValue    = 0x0004,
    Malformed            = 0x0010,
    LimitExceeded        = 0x0011,
    Io                   = 0x0020,
}

impl ErrorKind {
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// A floating value the active policy refuses to carry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AbnormalValue {
    Single(f32),
    Double(f64),
}

impl fmt::Display for AbnormalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbnormalValue::Single(v) => write!(f, "{:e} (f32 bits 0x{:08x})", v, v.to_bits()),
            AbnormalValue::Double(v) => write!(f, "{:e} (f64 bits 0x{:016x})", v, v.to_bits()),
        }
    }
}

/// Why a stream header was refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HeaderFault {
    BadMagic { have: i8, need: i8 },
    UnsupportedVersion { have: u16, max: u16 },
    ZeroVersion,
    MalformedVersion,
}

impl fmt::Display for HeaderFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderFault::*;
        match self {
            BadMagic { have, need } =>
                write!(f, "invalid magic: expected 0x{:02x}, got 0x{:02x}", *need as u8, *have as u8),
            UnsupportedVersion { have, max } =>
                write!(f, "unsupported archive version: {} > {}", have, max),
            ZeroVersion =>
                write!(f, "invalid archive version: 0"),
            MalformedVersion =>
                write!(f, "archive version field is not a valid u16"),
        }
    }
}

/// Unified archive error.
/// Every variant is fatal to the session: the stream position is unreliable afterwards.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("bad stream header: {0}")]
    BadStreamHeader(HeaderFault),

    /// `size` is the magnitude byte count claimed by the stream.
    #[error("requested integer size exceeds type size: {size}")]
    IntegerOverflow { size: u8 },

    #[error("cannot read a negative number into an unsigned type")]
    NegativeIntoUnsigned,

    #[error("serialization of illegal floating point value: {0}")]
    IllegalFloatValue(AbnormalValue),

    #[error("malformed archive data: {0}")]
    Malformed(String),

    #[error("sequence length {len} exceeds limit {max}")]
    LimitExceeded { len: u64, max: u64 },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ArchiveError {
    pub fn kind(&self) -> ErrorKind {
        use ArchiveError::*;
        match self {
            BadStreamHeader(_)     => ErrorKind::BadStreamHeader,
            IntegerOverflow { .. } => ErrorKind::IntegerOverflow,
            NegativeIntoUnsigned   => ErrorKind::NegativeIntoUnsigned,
            IllegalFloatValue(_)   => ErrorKind::IllegalFloatValue,
            Malformed(_)           => ErrorKind::Malformed,
            LimitExceeded { .. }   => ErrorKind::LimitExceeded,
            Io(_)                  => ErrorKind::Io,
        }
    }

    /// Human-readable kind label, falls back to the raw code for unknown values.
    pub fn kind_name(code: u16) -> String {
        enum_name_or_hex::<ErrorKind>(code)
    }
}

impl From<HeaderFault> for ArchiveError {
    fn from(fault: HeaderFault) -> Self {
        ArchiveError::BadStreamHeader(fault)
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
