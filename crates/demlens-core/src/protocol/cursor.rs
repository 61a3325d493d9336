//! Bounds-checked sequential reader (panic-free).
//!
//! Parsing rules:
//! - Never index (`buf[0]`); use `Buf` and `remaining()` checks.
//! - A failed read leaves the cursor where it was; nothing is half-consumed.

use bytes::{Buf, Bytes};

use crate::error::{DemError, Result};

/// Varints longer than this many groups are treated as corrupt input.
pub const MAX_VARINT_GROUPS: usize = 5;

/// Sequential reader over a fully materialized replay buffer.
#[derive(Debug, Clone)]
pub struct Cursor {
    buf: Bytes,
    len: usize,
}

impl Cursor {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        let buf = buf.into();
        let len = buf.len();
        Self { buf, len }
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.len - self.buf.remaining()
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// True iff unread bytes remain.
    pub fn has_more(&self) -> bool {
        self.buf.has_remaining()
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        let remaining = self.buf.remaining();
        if needed > remaining {
            return Err(DemError::BufferUnderrun { needed, remaining });
        }
        Ok(())
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    /// Exactly `n` bytes (zero-copy).
    pub fn read_exact(&mut self, n: usize) -> Result<Bytes> {
        self.ensure(n)?;
        Ok(self.buf.copy_to_bytes(n))
    }

    /// Everything not yet read.
    pub fn read_rest(&mut self) -> Bytes {
        let n = self.buf.remaining();
        self.buf.copy_to_bytes(n)
    }

    /// 4-byte big-endian signed integer.
    pub fn read_fixed_i32(&mut self) -> Result<i32> {
        self.ensure(4)?;
        Ok(self.buf.get_i32())
    }

    /// 4-byte big-endian unsigned integer.
    pub fn read_fixed_u32(&mut self) -> Result<u32> {
        self.ensure(4)?;
        Ok(self.buf.get_u32())
    }

    /// Little-endian base-128 varint, at most [`MAX_VARINT_GROUPS`] groups.
    pub fn read_varint(&mut self) -> Result<u64> {
        let mut value = 0u64;
        for (i, b) in self.buf.iter().copied().take(MAX_VARINT_GROUPS).enumerate() {
            value |= u64::from(b & 0x7f) << (7 * i);
            if b & 0x80 == 0 {
                self.buf.advance(i + 1);
                return Ok(value);
            }
        }

        let remaining = self.buf.remaining();
        if remaining >= MAX_VARINT_GROUPS {
            Err(DemError::CorruptVarint)
        } else {
            Err(DemError::BufferUnderrun {
                needed: remaining + 1,
                remaining,
            })
        }
    }

    /// Varint length prefix followed by that many bytes.
    ///
    /// Atomic: on failure the prefix is not consumed either.
    pub fn read_sized(&mut self) -> Result<Bytes> {
        let checkpoint = self.buf.clone();
        let res = self.read_varint().and_then(|size| {
            let size = usize::try_from(size).map_err(|_| DemError::BufferUnderrun {
                needed: usize::MAX,
                remaining: self.buf.remaining(),
            })?;
            self.read_exact(size)
        });
        if res.is_err() {
            self.buf = checkpoint;
        }
        res
    }
}
