//! archive/writer.rs
//! Encoding session bound to a byte sink.

use std::io::Write;

use crate::archive::traits::{OutputArchive, Primitive};
use crate::codec::{encode_float, encode_int, FloatPolicy, PortableFloat, PortableInt};
use crate::config::ArchiveConfig;
use crate::headers::begin_write;
use crate::telemetry::CodecCounters;
use crate::types::Result;

/// Writes primitives to `W` in caller order.
///
/// The header is emitted by the constructor. After any error the sink holds a
/// partial value and the session must be abandoned.
#[derive(Debug)]
pub struct ArchiveWriter<W: Write> {
    inner: W,
    config: ArchiveConfig,
    counters: CodecCounters,
}

impl<W: Write> ArchiveWriter<W> {
    /// Open a session with the default policy.
    pub fn new(inner: W) -> Result<Self> {
        Self::with_config(inner, ArchiveConfig::default())
    }

    /// Open a session and write the stream header.
    pub fn with_config(mut inner: W, config: ArchiveConfig) -> Result<Self> {
        config.validate()?;
        let header_len = begin_write(&mut inner, &config)?;

        let mut counters = CodecCounters::default();
        counters.add_header(header_len);

        Ok(Self { inner, config, counters })
    }

    /// Write any primitive.
    pub fn write<T: Primitive>(&mut self, value: &T) -> Result<()> {
        value.save(self)
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    pub fn counters(&self) -> &CodecCounters {
        &self.counters
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and hand back the sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn float_policy(&self) -> FloatPolicy {
        FloatPolicy {
            no_infnan: self.config.no_infnan(),
            allow_denormals: self.config.allows_denormals(),
        }
    }

    fn put_int<T: PortableInt>(&mut self, v: T) -> Result<()> {
        let n = encode_int(&mut self.inner, v)?;
        self.counters.add_integer(n);
        Ok(())
    }

    fn put_float<T: PortableFloat>(&mut self, v: T) -> Result<()> {
        let policy = self.float_policy();
        let n = encode_float(&mut self.inner, v, policy)?;
        self.counters.add_float(n);
        Ok(())
    }
}

impl<W: Write> OutputArchive for ArchiveWriter<W> {
    fn write_i8(&mut self, v: i8) -> Result<()> { self.put_int(v) }
    fn write_i16(&mut self, v: i16) -> Result<()> { self.put_int(v) }
    fn write_i32(&mut self, v: i32) -> Result<()> { self.put_int(v) }
    fn write_i64(&mut self, v: i64) -> Result<()> { self.put_int(v) }
    fn write_isize(&mut self, v: isize) -> Result<()> { self.put_int(v) }
    fn write_u8(&mut self, v: u8) -> Result<()> { self.put_int(v) }
    fn write_u16(&mut self, v: u16) -> Result<()> { self.put_int(v) }
    fn write_u32(&mut self, v: u32) -> Result<()> { self.put_int(v) }
    fn write_u64(&mut self, v: u64) -> Result<()> { self.put_int(v) }
    fn write_usize(&mut self, v: usize) -> Result<()> { self.put_int(v) }
    fn write_f32(&mut self, v: f32) -> Result<()> { self.put_float(v) }
    fn write_f64(&mut self, v: f64) -> Result<()> { self.put_float(v) }

    fn write_bytes(&mut self, v: &[u8]) -> Result<()> {
        self.put_int(v.len() as u64)?;
        self.inner.write_all(v)?;
        self.counters.add_blob(v.len());
        Ok(())
    }

    fn write_seq<T: Primitive>(&mut self, items: &[T]) -> Result<()> {
        self.put_int(items.len() as u64)?;
        for item in items {
            item.save(self)?;
        }
        self.counters.add_sequence();
        tracing::trace!(len = items.len(), "encoded sequence");
        Ok(())
    }
}
