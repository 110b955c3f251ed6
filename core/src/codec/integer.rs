//! codec/integer.rs
//!
//! Variable-width integer transcoder.
//!
//! Wire layout:
//!
//! ```text
//! [ size_prefix (1, signed) ]
//! [ magnitude   (|size_prefix|, big-endian, no leading zero byte) ]
//! ```
//!
//! The prefix sign carries the value sign. Zero is a lone `0x00` prefix.

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};

use crate::constants::MAX_INT_WIDTH;
use crate::types::{ArchiveError, Result};

/// Integer types the archive can carry.
///
/// `WIDTH` is the declared width on *this* host; a reader whose type is
/// narrower than the writer's rejects values that do not fit.
pub trait PortableInt: Copy {
    const WIDTH: usize;
    const SIGNED: bool;

    /// Split into (is_negative, magnitude).
    fn to_sign_magnitude(self) -> (bool, u64);

    /// Rebuild from sign and magnitude; `None` when out of range.
    fn from_sign_magnitude(negative: bool, magnitude: u64) -> Option<Self>;
}

macro_rules! impl_portable_int {
    ($($t:ty => $signed:expr),* $(,)?) => {$(
        impl PortableInt for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = $signed;

            #[inline]
            fn to_sign_magnitude(self) -> (bool, u64) {
                let v = self as i128;
                (v < 0, v.unsigned_abs() as u64)
            }

            #[inline]
            fn from_sign_magnitude(negative: bool, magnitude: u64) -> Option<Self> {
                let m = magnitude as i128;
                <$t>::try_from(if negative { -m } else { m }).ok()
            }
        }
    )*};
}

impl_portable_int! {
    i8 => true, i16 => true, i32 => true, i64 => true, isize => true,
    u8 => false, u16 => false, u32 => false, u64 => false, usize => false,
}

/// Minimal number of big-endian bytes holding `magnitude` (0 for zero).
#[inline]
pub fn magnitude_len(magnitude: u64) -> usize {
    (64 - magnitude.leading_zeros() as usize + 7) / 8
}

/// Encoded size of `value` in bytes, prefix included.
#[inline]
pub fn encoded_len<T: PortableInt>(value: T) -> usize {
    1 + magnitude_len(value.to_sign_magnitude().1)
}

/// Append the wire encoding of `value`. Returns the number of bytes written.
pub fn encode_int<W: Write, T: PortableInt>(w: &mut W, value: T) -> Result<usize> {
    let (negative, magnitude) = value.to_sign_magnitude();
    let n = magnitude_len(magnitude);
    debug_assert!(n <= T::WIDTH);

    let prefix = if negative { -(n as i8) } else { n as i8 };
    w.write_i8(prefix)?;

    let be = magnitude.to_be_bytes();
    w.write_all(&be[MAX_INT_WIDTH - n..])?;

    tracing::trace!(prefix, width = T::WIDTH, "encoded integer");
    Ok(1 + n)
}

/// Read one wire integer into `T`.
///
/// # Errors
/// - `NegativeIntoUnsigned` for a negative prefix and unsigned `T`.
/// - `IntegerOverflow { size }` when the stream claims more bytes than `T`
///   holds, or the magnitude is out of `T`'s range. `size` is always the
///   claimed byte count.
/// - `Malformed` for non-canonical magnitudes (leading zero byte).
pub fn decode_int<R: Read, T: PortableInt>(r: &mut R) -> Result<T> {
    let prefix = r.read_i8()?;

    if prefix < 0 && !T::SIGNED {
        return Err(ArchiveError::NegativeIntoUnsigned);
    }

    let size = prefix.unsigned_abs();
    let n = size as usize;
    if n > T::WIDTH {
        return Err(ArchiveError::IntegerOverflow { size });
    }

    let mut be = [0u8; MAX_INT_WIDTH];
    r.read_exact(&mut be[MAX_INT_WIDTH - n..])?;

    if n > 0 && be[MAX_INT_WIDTH - n] == 0 {
        return Err(ArchiveError::Malformed(format!(
            "non-canonical integer: leading zero byte in {}-byte magnitude", n
        )));
    }

    let magnitude = u64::from_be_bytes(be);
    T::from_sign_magnitude(prefix < 0, magnitude)
        .ok_or(ArchiveError::IntegerOverflow { size })
}
