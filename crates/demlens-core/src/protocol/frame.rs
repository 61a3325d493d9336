//! Outer replay stream: header check and lazy frame iteration.
//!
//! Layout:
//! - 8-byte filestamp `PBUFDEM\0`
//! - 4-byte big-endian signed offset (informational)
//! - frames: `varint kind | varint tick | varint size | size bytes`
//!
//! The compression flag lives inside the kind value and is masked off before
//! the kind table is consulted.

use bytes::Bytes;

use crate::codec::Codec;
use crate::error::{DemError, Result};
use crate::protocol::cursor::Cursor;
use crate::protocol::kinds::{split_compressed, DemoKind};

/// Required filestamp at the start of every replay.
pub const DEMO_MAGIC: &[u8; 8] = b"PBUFDEM\0";

/// Parsed replay header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoHeader {
    /// Offset field following the filestamp. Not needed for sequential reads.
    pub info_offset: i32,
}

/// Check the filestamp and read the offset field.
pub fn read_header(cursor: &mut Cursor) -> Result<DemoHeader> {
    let stamp = cursor.read_exact(DEMO_MAGIC.len())?;
    if stamp.as_ref() != DEMO_MAGIC {
        return Err(DemError::InvalidFormat(stamp.to_vec()));
    }
    let info_offset = cursor.read_fixed_i32()?;
    Ok(DemoHeader { info_offset })
}

/// One outer-stream record.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Zero-based position in the stream.
    pub index: usize,
    /// Dispatch key with the compression flag masked off.
    pub kind: DemoKind,
    pub tick: u64,
    /// Whether the payload was compressed on the wire.
    pub compressed: bool,
    /// Payload bytes, already decompressed.
    pub payload: Bytes,
}

/// Lazy, fused iterator over the frames of one replay buffer.
///
/// Yields at most `limit` frames when a limit is set. After the first error
/// it yields nothing further.
pub struct FrameReader<C> {
    cursor: Cursor,
    header: DemoHeader,
    codec: C,
    limit: Option<usize>,
    produced: usize,
    done: bool,
}

impl<C: Codec> FrameReader<C> {
    /// Validate the header and position the reader on the first frame.
    pub fn open(data: impl Into<Bytes>, codec: C) -> Result<Self> {
        let mut cursor = Cursor::new(data);
        let header = read_header(&mut cursor)?;
        Ok(Self {
            cursor,
            header,
            codec,
            limit: None,
            produced: 0,
            done: false,
        })
    }

    /// Stop cleanly after `limit` frames (`None` reads to the end).
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn header(&self) -> DemoHeader {
        self.header
    }

    /// Frames produced so far.
    pub fn frames_read(&self) -> usize {
        self.produced
    }

    fn read_frame(&mut self) -> Result<Frame> {
        let raw_kind = self.cursor.read_varint()?;
        let tick = self.cursor.read_varint()?;

        let (id, compressed) = split_compressed(raw_kind);
        let kind = DemoKind::from_id(id).ok_or(DemError::UnknownMessageKind(id))?;

        let raw = self.cursor.read_sized()?;
        let payload = if compressed {
            self.codec.decompress(&raw)?
        } else {
            raw
        };

        Ok(Frame {
            index: self.produced,
            kind,
            tick,
            compressed,
            payload,
        })
    }
}

impl<C: Codec> Iterator for FrameReader<C> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.limit.is_some_and(|limit| self.produced >= limit) || !self.cursor.has_more() {
            self.done = true;
            return None;
        }

        match self.read_frame() {
            Ok(frame) => {
                self.produced += 1;
                Some(Ok(frame))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<C: Codec> std::iter::FusedIterator for FrameReader<C> {}
