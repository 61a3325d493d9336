//! Inner packet stream: `varint kind | varint size | size bytes`, repeated.
//!
//! No tick, no compression flag, no magic. Unknown kinds are fatal because
//! the record layout is only known through the kind table.

use bytes::Bytes;

use crate::error::{DemError, Result};
use crate::protocol::cursor::Cursor;
use crate::protocol::kinds::NetKind;

/// One record of an embedded packet stream.
#[derive(Debug, Clone)]
pub struct PacketRecord {
    pub kind: NetKind,
    pub payload: Bytes,
}

/// Fused iterator over the records of one packet payload.
pub struct PacketReader {
    cursor: Cursor,
    done: bool,
}

impl PacketReader {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            cursor: Cursor::new(data),
            done: false,
        }
    }

    fn read_record(&mut self) -> Result<PacketRecord> {
        let id = self.cursor.read_varint()?;
        let kind = NetKind::from_id(id).ok_or(DemError::UnknownSubMessageKind(id))?;
        let payload = self.cursor.read_sized()?;
        Ok(PacketRecord { kind, payload })
    }
}

impl Iterator for PacketReader {
    type Item = Result<PacketRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || !self.cursor.has_more() {
            self.done = true;
            return None;
        }
        let res = self.read_record();
        if res.is_err() {
            self.done = true;
        }
        Some(res)
    }
}

impl std::iter::FusedIterator for PacketReader {}
