//! Synthetic replay builders shared by engine tests.

#![allow(clippy::unwrap_used)]
#![allow(dead_code)]

use bytes::Bytes;
use prost::Message as _;

use demlens_core::proto::demo::{CDemoFullPacket, CDemoPacket, CDemoStringTables};
use demlens_core::proto::net::{
    CsvcMsgGameEvent, CsvcMsgGameEventDescriptor, CsvcMsgGameEventDescriptorKey,
    CsvcMsgGameEventKey, CsvcMsgGameEventList, CsvcMsgUserMessage,
};
use demlens_core::protocol::kinds::{NetKind, UserKind};
use demlens_core::protocol::writer::PacketWriter;

/// `CDemoPacket` wrapping an inner record stream.
pub fn packet(inner: Bytes) -> Vec<u8> {
    CDemoPacket {
        sequence_in: 1,
        sequence_out_ack: 1,
        data: inner,
    }
    .encode_to_vec()
}

/// `CDemoFullPacket` wrapping an inner record stream one level deeper.
pub fn full_packet(inner: Bytes) -> Vec<u8> {
    CDemoFullPacket {
        string_table: Some(CDemoStringTables::default()),
        packet: Some(CDemoPacket {
            data: inner,
            ..Default::default()
        }),
    }
    .encode_to_vec()
}

pub fn user_message<M: prost::Message>(kind: UserKind, msg: &M) -> CsvcMsgUserMessage {
    CsvcMsgUserMessage {
        msg_type: kind.id(),
        msg_data: msg.encode_to_vec().into(),
    }
}

/// Descriptor from (name, type tag) pairs.
pub fn descriptor(eventid: i32, name: &str, keys: &[(&str, i32)]) -> CsvcMsgGameEventDescriptor {
    CsvcMsgGameEventDescriptor {
        eventid,
        name: name.into(),
        keys: keys
            .iter()
            .map(|(n, t)| CsvcMsgGameEventDescriptorKey {
                r#type: *t,
                name: (*n).into(),
            })
            .collect(),
    }
}

pub fn event_list(descriptors: Vec<CsvcMsgGameEventDescriptor>) -> Bytes {
    let mut p = PacketWriter::new();
    p.message(NetKind::GameEventList, &CsvcMsgGameEventList { descriptors });
    p.finish()
}

pub fn event(eventid: i32, keys: Vec<CsvcMsgGameEventKey>) -> Bytes {
    let mut p = PacketWriter::new();
    p.message(
        NetKind::GameEvent,
        &CsvcMsgGameEvent {
            event_name: String::new(),
            eventid,
            keys,
        },
    );
    p.finish()
}

pub fn string_key(s: &str) -> CsvcMsgGameEventKey {
    CsvcMsgGameEventKey {
        r#type: 1,
        val_string: s.into(),
        ..Default::default()
    }
}

pub fn short_key(v: i32) -> CsvcMsgGameEventKey {
    CsvcMsgGameEventKey {
        r#type: 4,
        val_short: v,
        ..Default::default()
    }
}

pub fn bool_key(v: bool) -> CsvcMsgGameEventKey {
    CsvcMsgGameEventKey {
        r#type: 6,
        val_bool: v,
        ..Default::default()
    }
}
