//! archive/reader.rs
//! Decoding session bound to a byte source.

use std::io::{self, Read};

use crate::archive::traits::{InputArchive, Primitive};
use crate::codec::{decode_float, decode_int, encoded_len, FloatPolicy, PortableFloat, PortableInt};
use crate::config::ArchiveConfig;
use crate::headers::{begin_read, StreamHeader};
use crate::telemetry::CodecCounters;
use crate::types::{ArchiveError, Result};

/// Reads primitives from `R` in the order they were written.
///
/// The header is validated by the constructor. Any error leaves the source at
/// an unspecified position; do not resume.
#[derive(Debug)]
pub struct ArchiveReader<R: Read> {
    inner: R,
    config: ArchiveConfig,
    header: StreamHeader,
    counters: CodecCounters,
}

impl<R: Read> ArchiveReader<R> {
    /// Open a session with the default policy.
    pub fn new(inner: R) -> Result<Self> {
        Self::with_config(inner, ArchiveConfig::default())
    }

    /// Open a session and validate the stream header.
    pub fn with_config(mut inner: R, config: ArchiveConfig) -> Result<Self> {
        config.validate()?;
        let header = begin_read(&mut inner, &config)?;

        let mut counters = CodecCounters::default();
        if !config.no_header() {
            counters.add_header(header.encoded_len());
        }

        Ok(Self { inner, config, header, counters })
    }

    /// Read any primitive.
    pub fn read<T: Primitive>(&mut self) -> Result<T> {
        T::load(self)
    }

    /// Format version the peer wrote (the configured one when header-less).
    pub fn peer_version(&self) -> u16 {
        self.header.version
    }

    pub fn header(&self) -> &StreamHeader {
        &self.header
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    pub fn counters(&self) -> &CodecCounters {
        &self.counters
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn float_policy(&self) -> FloatPolicy {
        FloatPolicy {
            no_infnan: self.config.no_infnan(),
            allow_denormals: self.config.allows_denormals(),
        }
    }

    fn take_int<T: PortableInt>(&mut self) -> Result<T> {
        let v = decode_int(&mut self.inner)?;
        // Canonical encodings only, so the length is recoverable from the value.
        self.counters.add_integer(encoded_len(v));
        Ok(v)
    }

    fn take_float<T: PortableFloat>(&mut self) -> Result<T> {
        let policy = self.float_policy();
        let v = decode_float(&mut self.inner, policy)?;
        self.counters.add_float(T::WIDTH);
        Ok(v)
    }
}

impl<R: Read> InputArchive for ArchiveReader<R> {
    fn read_i8(&mut self) -> Result<i8> { self.take_int() }
    fn read_i16(&mut self) -> Result<i16> { self.take_int() }
    fn read_i32(&mut self) -> Result<i32> { self.take_int() }
    fn read_i64(&mut self) -> Result<i64> { self.take_int() }
    fn read_isize(&mut self) -> Result<isize> { self.take_int() }
    fn read_u8(&mut self) -> Result<u8> { self.take_int() }
    fn read_u16(&mut self) -> Result<u16> { self.take_int() }
    fn read_u32(&mut self) -> Result<u32> { self.take_int() }
    fn read_u64(&mut self) -> Result<u64> { self.take_int() }
    fn read_usize(&mut self) -> Result<usize> { self.take_int() }
    fn read_f32(&mut self) -> Result<f32> { self.take_float() }
    fn read_f64(&mut self) -> Result<f64> { self.take_float() }

    fn read_bool(&mut self) -> Result<bool> {
        match self.take_int::<u8>()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(ArchiveError::Malformed(format!("invalid bool value {}", other))),
        }
    }

    fn read_char(&mut self) -> Result<char> {
        let raw = self.take_int::<u32>()?;
        char::from_u32(raw)
            .ok_or_else(|| ArchiveError::Malformed(format!("invalid char scalar 0x{:x}", raw)))
    }

    fn read_bytes(&mut self) -> Result<Vec<u8>> {
        let len = self.read_len()?;

        // Grow with the data actually present instead of trusting `len`.
        let mut buf = Vec::new();
        (&mut self.inner).take(len as u64).read_to_end(&mut buf)?;
        if buf.len() != len {
            return Err(ArchiveError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("blob truncated: {} of {} bytes", buf.len(), len),
            )));
        }

        self.counters.add_blob(len);
        Ok(buf)
    }

    fn read_string(&mut self) -> Result<String> {
        let bytes = self.read_bytes()?;
        String::from_utf8(bytes).map_err(|e| ArchiveError::Malformed(format!("invalid utf-8: {}", e)))
    }

    fn read_len(&mut self) -> Result<usize> {
        let len: u64 = self.take_int()?;
        let max = self.config.max_sequence_len;
        if len > max {
            tracing::warn!(len, max, "sequence length over limit");
            return Err(ArchiveError::LimitExceeded { len, max });
        }
        usize::try_from(len).map_err(|_| ArchiveError::LimitExceeded { len, max: usize::MAX as u64 })
    }

    fn read_seq<T: Primitive>(&mut self) -> Result<Vec<T>> {
        let len = self.read_len()?;
        let mut out = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            out.push(T::load(self)?);
        }
        self.counters.add_sequence();
        Ok(out)
    }
}
