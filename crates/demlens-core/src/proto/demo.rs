//! Outer stream message schemas.
//!
//! Hand-written with prost derive macros; field numbers match the replay's
//! wire schema. Fields the decoder does not surface are left out and skipped
//! by prost on decode.

use bytes::Bytes;
use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct CDemoStop {}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoFileHeader {
    #[prost(string, tag = "1")]
    pub demo_file_stamp: String,
    #[prost(int32, tag = "2")]
    pub network_protocol: i32,
    #[prost(string, tag = "3")]
    pub server_name: String,
    #[prost(string, tag = "4")]
    pub client_name: String,
    #[prost(string, tag = "5")]
    pub map_name: String,
    #[prost(string, tag = "6")]
    pub game_directory: String,
    #[prost(int32, tag = "7")]
    pub fullpackets_version: i32,
    #[prost(bool, tag = "8")]
    pub allow_clientside_entities: bool,
    #[prost(bool, tag = "9")]
    pub allow_clientside_particles: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoFileInfo {
    #[prost(float, tag = "1")]
    pub playback_time: f32,
    #[prost(int32, tag = "2")]
    pub playback_ticks: i32,
    #[prost(int32, tag = "3")]
    pub playback_frames: i32,
    #[prost(message, optional, tag = "4")]
    pub game_info: Option<CGameInfo>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CGameInfo {
    #[prost(message, optional, tag = "4")]
    pub dota: Option<CDotaGameInfo>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CDotaGameInfo {
    #[prost(uint32, tag = "1")]
    pub match_id: u32,
    #[prost(int32, tag = "2")]
    pub game_mode: i32,
    #[prost(int32, tag = "3")]
    pub game_winner: i32,
    #[prost(message, repeated, tag = "4")]
    pub player_info: Vec<CPlayerInfo>,
    #[prost(uint32, tag = "5")]
    pub leagueid: u32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CPlayerInfo {
    #[prost(string, tag = "1")]
    pub hero_name: String,
    #[prost(string, tag = "2")]
    pub player_name: String,
    #[prost(bool, tag = "3")]
    pub is_fake_client: bool,
    #[prost(uint64, tag = "4")]
    pub steamid: u64,
    #[prost(int32, tag = "5")]
    pub game_team: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoSyncTick {}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoSendTables {
    #[prost(bytes = "bytes", tag = "1")]
    pub data: Bytes,
}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoClassInfo {
    #[prost(message, repeated, tag = "1")]
    pub classes: Vec<CDemoClass>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoClass {
    #[prost(int32, tag = "1")]
    pub class_id: i32,
    #[prost(string, tag = "2")]
    pub network_name: String,
    #[prost(string, tag = "3")]
    pub table_name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoStringTables {
    #[prost(message, repeated, tag = "1")]
    pub tables: Vec<CDemoStringTable>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoStringTable {
    #[prost(string, tag = "1")]
    pub table_name: String,
    #[prost(message, repeated, tag = "2")]
    pub items: Vec<CDemoStringTableItem>,
    #[prost(message, repeated, tag = "3")]
    pub items_clientside: Vec<CDemoStringTableItem>,
    #[prost(int32, tag = "4")]
    pub table_flags: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoStringTableItem {
    #[prost(string, tag = "1")]
    pub str: String,
    #[prost(bytes = "bytes", tag = "2")]
    pub data: Bytes,
}

/// Packet and signon packet share this schema.
#[derive(Clone, PartialEq, Message)]
pub struct CDemoPacket {
    #[prost(int32, tag = "1")]
    pub sequence_in: i32,
    #[prost(int32, tag = "2")]
    pub sequence_out_ack: i32,
    /// Embedded inner packet stream.
    #[prost(bytes = "bytes", tag = "3")]
    pub data: Bytes,
}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoConsoleCmd {
    #[prost(string, tag = "1")]
    pub cmdstring: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoCustomData {
    #[prost(int32, tag = "1")]
    pub callback_index: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub data: Bytes,
}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoCustomDataCallbacks {
    #[prost(string, repeated, tag = "1")]
    pub save_id: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CDemoUserCmd {
    #[prost(int32, tag = "1")]
    pub cmd_number: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub data: Bytes,
}

/// Snapshot frame: string tables plus a packet nested one level deeper.
#[derive(Clone, PartialEq, Message)]
pub struct CDemoFullPacket {
    #[prost(message, optional, tag = "1")]
    pub string_table: Option<CDemoStringTables>,
    #[prost(message, optional, tag = "2")]
    pub packet: Option<CDemoPacket>,
}
