//! Stream builders for synthetic replays (fixtures, tests, tooling).
//!
//! The output is byte-compatible with [`FrameReader`](super::frame::FrameReader)
//! and [`PacketReader`](super::packet::PacketReader).

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{DemError, Result};
use crate::protocol::frame::DEMO_MAGIC;
use crate::protocol::kinds::{DemoKind, NetKind, DEM_IS_COMPRESSED};

/// Append `value` as a little-endian base-128 varint.
pub fn put_varint(buf: &mut impl BufMut, mut value: u64) {
    while value >= 0x80 {
        buf.put_u8((value & 0x7f) as u8 | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}

/// Builder for an outer replay stream.
#[derive(Debug)]
pub struct DemoWriter {
    buf: BytesMut,
    frames: usize,
}

impl Default for DemoWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoWriter {
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Header with an explicit offset field.
    pub fn with_offset(info_offset: i32) -> Self {
        let mut buf = BytesMut::with_capacity(64);
        buf.put_slice(DEMO_MAGIC);
        buf.put_i32(info_offset);
        Self { buf, frames: 0 }
    }

    /// Uncompressed frame.
    pub fn frame(&mut self, kind: DemoKind, tick: u64, payload: &[u8]) -> &mut Self {
        self.raw_frame(kind.id(), tick, payload)
    }

    /// Prost-encoded uncompressed frame.
    pub fn message<M: prost::Message>(&mut self, kind: DemoKind, tick: u64, msg: &M) -> &mut Self {
        self.frame(kind, tick, &msg.encode_to_vec())
    }

    /// Snappy-compressed frame; the flag is OR'd into the kind.
    pub fn compressed_frame(&mut self, kind: DemoKind, tick: u64, payload: &[u8]) -> Result<&mut Self> {
        let packed = snap::raw::Encoder::new()
            .compress_vec(payload)
            .map_err(|e| DemError::Compress(e.to_string()))?;
        Ok(self.raw_frame(kind.id() | DEM_IS_COMPRESSED, tick, &packed))
    }

    /// Frame with an arbitrary raw kind value, written as is.
    pub fn raw_frame(&mut self, raw_kind: u64, tick: u64, payload: &[u8]) -> &mut Self {
        put_varint(&mut self.buf, raw_kind);
        put_varint(&mut self.buf, tick);
        put_varint(&mut self.buf, payload.len() as u64);
        self.buf.put_slice(payload);
        self.frames += 1;
        self
    }

    /// Frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}

/// Builder for an inner packet stream.
#[derive(Debug, Default)]
pub struct PacketWriter {
    buf: BytesMut,
}

impl PacketWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: NetKind, payload: &[u8]) -> &mut Self {
        self.raw_record(kind.id(), payload)
    }

    /// Prost-encoded record.
    pub fn message<M: prost::Message>(&mut self, kind: NetKind, msg: &M) -> &mut Self {
        self.record(kind, &msg.encode_to_vec())
    }

    pub fn raw_record(&mut self, id: u64, payload: &[u8]) -> &mut Self {
        put_varint(&mut self.buf, id);
        put_varint(&mut self.buf, payload.len() as u64);
        self.buf.put_slice(payload);
        self
    }

    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}
