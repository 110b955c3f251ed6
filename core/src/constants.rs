/// Sentinel written as the very first byte of every archive.
pub const MAGIC_BYTE: i8 = 127;

/// Highest stream format version this implementation writes and understands.
/// Version 0 is never produced and marks a corrupt header.
pub const ARCHIVE_VERSION: u16 = 1;

/// Upper bound on element counts read from a stream unless configured otherwise.
pub const DEFAULT_MAX_SEQUENCE_LEN: u64 = 1 << 28;

/// Largest integer width the wire format carries (bytes).
pub const MAX_INT_WIDTH: usize = 8;

/// Archive flag bit values, shared by both ends of a session.
pub mod flag_bits {
    pub const NO_HEADER: u32    = 0x0001;
    pub const NO_INFNAN: u32    = 0x0040;
    pub const NO_DENORMALS: u32 = 0x0080;
}

/// Portable float layouts: (exponent bits, mantissa bits).
pub mod float_layout {
    pub const SINGLE_EXP_BITS: u32  = 8;
    pub const SINGLE_MANT_BITS: u32 = 23;
    pub const DOUBLE_EXP_BITS: u32  = 11;
    pub const DOUBLE_MANT_BITS: u32 = 52;
}
