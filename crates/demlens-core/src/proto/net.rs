//! Inner packet message schemas (net and svc messages).

use bytes::Bytes;
use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct CnetMsgNop {}

#[derive(Clone, PartialEq, Message)]
pub struct CnetMsgDisconnect {
    #[prost(string, tag = "2")]
    pub text: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CnetMsgFile {
    #[prost(int32, tag = "1")]
    pub transfer_id: i32,
    #[prost(string, tag = "2")]
    pub file_name: String,
    #[prost(bool, tag = "3")]
    pub is_replay_demo_file: bool,
    #[prost(bool, tag = "4")]
    pub deny: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct CnetMsgSplitScreenUser {
    #[prost(int32, tag = "1")]
    pub slot: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CnetMsgTick {
    #[prost(uint32, tag = "1")]
    pub tick: u32,
    #[prost(uint32, tag = "2")]
    pub host_frametime: u32,
    #[prost(uint32, tag = "3")]
    pub host_frametime_std_deviation: u32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CnetMsgStringCmd {
    #[prost(string, tag = "1")]
    pub command: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CnetMsgSetConVar {
    #[prost(message, optional, tag = "1")]
    pub convars: Option<CMsgCVars>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CMsgCVars {
    #[prost(message, repeated, tag = "1")]
    pub cvars: Vec<CMsgCVar>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CMsgCVar {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CnetMsgSignonState {
    #[prost(uint32, tag = "1")]
    pub signon_state: u32,
    #[prost(uint32, tag = "2")]
    pub spawn_count: u32,
    #[prost(uint32, tag = "3")]
    pub num_server_players: u32,
    #[prost(string, repeated, tag = "4")]
    pub players_networkids: Vec<String>,
    #[prost(string, tag = "5")]
    pub map_name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgServerInfo {
    #[prost(int32, tag = "1")]
    pub protocol: i32,
    #[prost(int32, tag = "2")]
    pub server_count: i32,
    #[prost(bool, tag = "3")]
    pub is_dedicated: bool,
    #[prost(bool, tag = "4")]
    pub is_hltv: bool,
    #[prost(bool, tag = "5")]
    pub is_replay: bool,
    #[prost(int32, tag = "6")]
    pub c_os: i32,
    #[prost(fixed32, tag = "7")]
    pub map_crc: u32,
    #[prost(fixed32, tag = "8")]
    pub client_crc: u32,
    #[prost(fixed32, tag = "9")]
    pub string_table_crc: u32,
    #[prost(int32, tag = "10")]
    pub max_clients: i32,
    #[prost(int32, tag = "11")]
    pub max_classes: i32,
    #[prost(int32, tag = "12")]
    pub player_slot: i32,
    #[prost(float, tag = "13")]
    pub tick_interval: f32,
    #[prost(string, tag = "14")]
    pub game_dir: String,
    #[prost(string, tag = "15")]
    pub map_name: String,
    #[prost(string, tag = "16")]
    pub sky_name: String,
    #[prost(string, tag = "17")]
    pub host_name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgSendTable {
    #[prost(bool, tag = "1")]
    pub is_end: bool,
    #[prost(string, tag = "2")]
    pub net_table_name: String,
    #[prost(bool, tag = "3")]
    pub needs_decoder: bool,
    #[prost(message, repeated, tag = "4")]
    pub props: Vec<CsvcMsgSendProp>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgSendProp {
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub var_name: String,
    #[prost(int32, tag = "3")]
    pub flags: i32,
    #[prost(int32, tag = "4")]
    pub priority: i32,
    #[prost(string, tag = "5")]
    pub dt_name: String,
    #[prost(int32, tag = "6")]
    pub num_elements: i32,
    #[prost(float, tag = "7")]
    pub low_value: f32,
    #[prost(float, tag = "8")]
    pub high_value: f32,
    #[prost(int32, tag = "9")]
    pub num_bits: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgClassInfo {
    #[prost(bool, tag = "1")]
    pub create_on_client: bool,
    #[prost(message, repeated, tag = "2")]
    pub classes: Vec<CsvcMsgClass>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgClass {
    #[prost(int32, tag = "1")]
    pub class_id: i32,
    #[prost(string, tag = "2")]
    pub data_table_name: String,
    #[prost(string, tag = "3")]
    pub class_name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgSetPause {
    #[prost(bool, tag = "1")]
    pub paused: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgCreateStringTable {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(int32, tag = "2")]
    pub max_entries: i32,
    #[prost(int32, tag = "3")]
    pub num_entries: i32,
    #[prost(bool, tag = "4")]
    pub user_data_fixed_size: bool,
    #[prost(int32, tag = "5")]
    pub user_data_size: i32,
    #[prost(int32, tag = "6")]
    pub user_data_size_bits: i32,
    #[prost(int32, tag = "7")]
    pub flags: i32,
    #[prost(bytes = "bytes", tag = "8")]
    pub string_data: Bytes,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgUpdateStringTable {
    #[prost(int32, tag = "1")]
    pub table_id: i32,
    #[prost(int32, tag = "2")]
    pub num_changed_entries: i32,
    #[prost(bytes = "bytes", tag = "3")]
    pub string_data: Bytes,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgVoiceInit {
    #[prost(int32, tag = "1")]
    pub quality: i32,
    #[prost(string, tag = "2")]
    pub codec: String,
    #[prost(int32, tag = "3")]
    pub version: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgVoiceData {
    #[prost(int32, tag = "1")]
    pub client: i32,
    #[prost(bool, tag = "2")]
    pub proximity: bool,
    #[prost(fixed64, tag = "3")]
    pub xuid: u64,
    #[prost(int32, tag = "4")]
    pub audible_mask: i32,
    #[prost(bytes = "bytes", tag = "5")]
    pub voice_data: Bytes,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgPrint {
    #[prost(string, tag = "1")]
    pub text: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgSounds {
    #[prost(bool, tag = "1")]
    pub reliable_sound: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgSetView {
    #[prost(int32, tag = "1")]
    pub entity_index: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CMsgQAngle {
    #[prost(float, tag = "1")]
    pub x: f32,
    #[prost(float, tag = "2")]
    pub y: f32,
    #[prost(float, tag = "3")]
    pub z: f32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CMsgVector {
    #[prost(float, tag = "1")]
    pub x: f32,
    #[prost(float, tag = "2")]
    pub y: f32,
    #[prost(float, tag = "3")]
    pub z: f32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgFixAngle {
    #[prost(bool, tag = "1")]
    pub relative: bool,
    #[prost(message, optional, tag = "2")]
    pub angle: Option<CMsgQAngle>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgCrosshairAngle {
    #[prost(message, optional, tag = "1")]
    pub angle: Option<CMsgQAngle>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgBspDecal {
    #[prost(message, optional, tag = "1")]
    pub pos: Option<CMsgVector>,
    #[prost(int32, tag = "2")]
    pub decal_texture_index: i32,
    #[prost(int32, tag = "3")]
    pub entity_index: i32,
    #[prost(int32, tag = "4")]
    pub model_index: i32,
    #[prost(bool, tag = "5")]
    pub low_priority: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgSplitScreen {
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(int32, tag = "2")]
    pub slot: i32,
    #[prost(int32, tag = "3")]
    pub player_index: i32,
}

/// Envelope for a user message: discriminator plus an exact-length blob.
#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgUserMessage {
    #[prost(int32, tag = "1")]
    pub msg_type: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub msg_data: Bytes,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgEntityMessage {
    #[prost(int32, tag = "1")]
    pub ent_index: i32,
    #[prost(int32, tag = "2")]
    pub class_id: i32,
    #[prost(bytes = "bytes", tag = "3")]
    pub ent_data: Bytes,
}

/// Event record: id plus positional keys, typed by the matching descriptor.
#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgGameEvent {
    #[prost(string, tag = "1")]
    pub event_name: String,
    #[prost(int32, tag = "2")]
    pub eventid: i32,
    #[prost(message, repeated, tag = "3")]
    pub keys: Vec<CsvcMsgGameEventKey>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgGameEventKey {
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub val_string: String,
    #[prost(float, tag = "3")]
    pub val_float: f32,
    #[prost(int64, tag = "4")]
    pub val_long: i64,
    #[prost(int32, tag = "5")]
    pub val_short: i32,
    #[prost(int32, tag = "6")]
    pub val_byte: i32,
    #[prost(bool, tag = "7")]
    pub val_bool: bool,
    #[prost(uint64, tag = "8")]
    pub val_uint64: u64,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgPacketEntities {
    #[prost(int32, tag = "1")]
    pub max_entries: i32,
    #[prost(int32, tag = "2")]
    pub updated_entries: i32,
    #[prost(bool, tag = "3")]
    pub is_delta: bool,
    #[prost(bool, tag = "4")]
    pub update_baseline: bool,
    #[prost(int32, tag = "5")]
    pub baseline: i32,
    #[prost(int32, tag = "6")]
    pub delta_from: i32,
    #[prost(bytes = "bytes", tag = "7")]
    pub entity_data: Bytes,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgTempEntities {
    #[prost(bool, tag = "1")]
    pub reliable: bool,
    #[prost(int32, tag = "2")]
    pub num_entries: i32,
    #[prost(bytes = "bytes", tag = "3")]
    pub entity_data: Bytes,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgPrefetch {
    #[prost(int32, tag = "1")]
    pub sound_index: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgMenu {
    #[prost(int32, tag = "1")]
    pub dialog_type: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub menu_key_values: Bytes,
}

/// Schema descriptor table for game events.
#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgGameEventList {
    #[prost(message, repeated, tag = "1")]
    pub descriptors: Vec<CsvcMsgGameEventDescriptor>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgGameEventDescriptor {
    #[prost(int32, tag = "1")]
    pub eventid: i32,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, repeated, tag = "3")]
    pub keys: Vec<CsvcMsgGameEventDescriptorKey>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgGameEventDescriptorKey {
    /// Type tag in 1..=7.
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CsvcMsgGetCvarValue {
    #[prost(int32, tag = "1")]
    pub cookie: i32,
    #[prost(string, tag = "2")]
    pub cvar_name: String,
}
