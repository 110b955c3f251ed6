//! telemetry/counters.rs
//! Per-session counters.
//!
//! Summary: Collects value counts and byte counts during encode/decode.
//! Owned by one writer/reader, so no atomics.
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCounters {
    pub integers: u64,
    pub floats: u64,
    /// Length-prefixed blobs and strings.
    pub blobs: u64,
    /// Sequences written or read through `write_seq`/`read_seq`.
    pub sequences: u64,
    pub bytes_header: u64,
    pub bytes_payload: u64,
}

impl CodecCounters {
    /// Record the stream header.
    pub fn add_header(&mut self, header_len: usize) {
        self.bytes_header += header_len as u64;
    }

    pub fn add_integer(&mut self, encoded_len: usize) {
        self.integers += 1;
        self.bytes_payload += encoded_len as u64;
    }

    pub fn add_float(&mut self, encoded_len: usize) {
        self.floats += 1;
        self.bytes_payload += encoded_len as u64;
    }

    /// Raw body of a blob; its length prefix is counted as an integer.
    pub fn add_blob(&mut self, body_len: usize) {
        self.blobs += 1;
        self.bytes_payload += body_len as u64;
    }

    pub fn add_sequence(&mut self) {
        self.sequences += 1;
    }

    pub fn total_bytes(&self) -> u64 {
        self.bytes_header + self.bytes_payload
    }

    pub fn merge(&mut self, other: &CodecCounters) {
        self.integers += other.integers;
        self.floats += other.floats;
        self.blobs += other.blobs;
        self.sequences += other.sequences;
        self.bytes_header += other.bytes_header;
        self.bytes_payload += other.bytes_payload;
    }
}

impl AddAssign for CodecCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
