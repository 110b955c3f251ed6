//! codec/float.rs
//!
//! Portable floating point transcoder.
//!
//! Values are split into sign, biased exponent and mantissa, then packed into a
//! fixed layout written most-significant byte first:
//!
//! ```text
//! single: [ sign (1) | exponent (8)  | mantissa (23) ]  4 bytes
//! double: [ sign (1) | exponent (11) | mantissa (52) ]  8 bytes
//! ```
//!
//! Nothing of the host float representation reaches the stream.

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::constants::float_layout::{DOUBLE_EXP_BITS, DOUBLE_MANT_BITS, SINGLE_EXP_BITS, SINGLE_MANT_BITS};
use crate::types::{AbnormalValue, ArchiveError, Result};

/// Float classification computed from the portable fields, not the host FPU.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FloatClass {
    Zero,
    Normal,
    Subnormal,
    Infinite,
    Nan,
}

/// Decomposed float. `exponent` is biased, `mantissa` excludes the hidden bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FloatParts {
    pub sign: bool,
    pub exponent: u32,
    pub mantissa: u64,
}

impl FloatParts {
    pub fn classify<T: PortableFloat>(&self) -> FloatClass {
        let exp_max = (1u32 << T::EXP_BITS) - 1;
        match (self.exponent, self.mantissa) {
            (0, 0) => FloatClass::Zero,
            (0, _) => FloatClass::Subnormal,
            (e, 0) if e == exp_max => FloatClass::Infinite,
            (e, _) if e == exp_max => FloatClass::Nan,
            _ => FloatClass::Normal,
        }
    }

    /// Split a packed portable word.
    pub fn unpack<T: PortableFloat>(word: u64) -> Self {
        let mant_mask = (1u64 << T::MANT_BITS) - 1;
        let exp_mask = (1u64 << T::EXP_BITS) - 1;
        Self {
            sign: (word >> (T::EXP_BITS + T::MANT_BITS)) & 1 == 1,
            exponent: ((word >> T::MANT_BITS) & exp_mask) as u32,
            mantissa: word & mant_mask,
        }
    }

    /// Pack into the portable word for `T`.
    pub fn pack<T: PortableFloat>(&self) -> u64 {
        ((self.sign as u64) << (T::EXP_BITS + T::MANT_BITS))
            | ((self.exponent as u64) << T::MANT_BITS)
            | self.mantissa
    }
}

/// Floating types the archive can carry.
pub trait PortableFloat: Copy {
    /// Bytes on the wire.
    const WIDTH: usize;
    const EXP_BITS: u32;
    const MANT_BITS: u32;
    /// Whether this type can hold denormalized values at all.
    const SUPPORTS_DENORM: bool;

    fn to_parts(self) -> FloatParts;
    fn from_parts(parts: FloatParts) -> Self;
    fn abnormal(self) -> AbnormalValue;

    /// Write a packed word as `WIDTH` big-endian bytes.
    fn write_word<W: Write>(w: &mut W, word: u64) -> io::Result<()>;
    fn read_word<R: Read>(r: &mut R) -> io::Result<u64>;
}

impl PortableFloat for f32 {
    const WIDTH: usize = 4;
    const EXP_BITS: u32 = SINGLE_EXP_BITS;
    const MANT_BITS: u32 = SINGLE_MANT_BITS;
    const SUPPORTS_DENORM: bool = true;

    #[inline]
    fn to_parts(self) -> FloatParts {
        FloatParts::unpack::<f32>(self.to_bits() as u64)
    }

    #[inline]
    fn from_parts(parts: FloatParts) -> Self {
        f32::from_bits(parts.pack::<f32>() as u32)
    }

    fn abnormal(self) -> AbnormalValue {
        AbnormalValue::Single(self)
    }

    fn write_word<W: Write>(w: &mut W, word: u64) -> io::Result<()> {
        w.write_u32::<BigEndian>(word as u32)
    }

    fn read_word<R: Read>(r: &mut R) -> io::Result<u64> {
        Ok(r.read_u32::<BigEndian>()? as u64)
    }
}

impl PortableFloat for f64 {
    const WIDTH: usize = 8;
    const EXP_BITS: u32 = DOUBLE_EXP_BITS;
    const MANT_BITS: u32 = DOUBLE_MANT_BITS;
    const SUPPORTS_DENORM: bool = true;

    #[inline]
    fn to_parts(self) -> FloatParts {
        FloatParts::unpack::<f64>(self.to_bits())
    }

    #[inline]
    fn from_parts(parts: FloatParts) -> Self {
        f64::from_bits(parts.pack::<f64>())
    }

    fn abnormal(self) -> AbnormalValue {
        AbnormalValue::Double(self)
    }

    fn write_word<W: Write>(w: &mut W, word: u64) -> io::Result<()> {
        w.write_u64::<BigEndian>(word)
    }

    fn read_word<R: Read>(r: &mut R) -> io::Result<u64> {
        r.read_u64::<BigEndian>()
    }
}

/// Float policy for one session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FloatPolicy {
    pub no_infnan: bool,
    pub allow_denormals: bool,
}

impl Default for FloatPolicy {
    fn default() -> Self {
        Self { no_infnan: false, allow_denormals: true }
    }
}

/// Append the portable encoding of `value`. Returns the number of bytes written.
///
/// Fails with `IllegalFloatValue` for inf/NaN under `no_infnan`.
pub fn encode_float<W: Write, T: PortableFloat>(
    w: &mut W,
    value: T,
    policy: FloatPolicy,
) -> Result<usize> {
    let parts = value.to_parts();
    let class = parts.classify::<T>();

    if policy.no_infnan && matches!(class, FloatClass::Infinite | FloatClass::Nan) {
        tracing::warn!(?class, "refusing to encode inf/nan under no_infnan");
        return Err(ArchiveError::IllegalFloatValue(value.abnormal()));
    }

    T::write_word(w, parts.pack::<T>())?;
    tracing::trace!(?class, width = T::WIDTH, "encoded float");
    Ok(T::WIDTH)
}

/// Read one portable float into `T`, bit-for-bit.
///
/// Fails with `IllegalFloatValue` for inf/NaN under `no_infnan`, and for
/// denormals when neither `T` nor the policy permits them.
pub fn decode_float<R: Read, T: PortableFloat>(r: &mut R, policy: FloatPolicy) -> Result<T> {
    let parts = FloatParts::unpack::<T>(T::read_word(r)?);
    let class = parts.classify::<T>();
    let value = T::from_parts(parts);

    match class {
        FloatClass::Infinite | FloatClass::Nan if policy.no_infnan => {
            tracing::warn!(?class, "rejecting inf/nan under no_infnan");
            Err(ArchiveError::IllegalFloatValue(value.abnormal()))
        }
        FloatClass::Subnormal if !(T::SUPPORTS_DENORM && policy.allow_denormals) => {
            tracing::warn!("rejecting denormal for target without denormal support");
            Err(ArchiveError::IllegalFloatValue(value.abnormal()))
        }
        _ => Ok(value),
    }
}
