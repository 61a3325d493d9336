//! User message schemas carried inside `CSVCMsg_UserMessage` blobs.
//!
//! Only the messages the decoder surfaces structurally are modelled; every
//! other known kind is passed through as raw bytes.

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct CUserMsgAchievementEvent {
    #[prost(uint32, tag = "1")]
    pub achievement: u32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CUserMsgHintText {
    #[prost(string, tag = "1")]
    pub message: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CUserMsgSayText {
    #[prost(uint32, tag = "1")]
    pub client: u32,
    #[prost(string, tag = "2")]
    pub text: String,
    #[prost(bool, tag = "3")]
    pub chat: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct CUserMsgSayText2 {
    #[prost(uint32, tag = "1")]
    pub client: u32,
    #[prost(bool, tag = "2")]
    pub chat: bool,
    #[prost(string, tag = "3")]
    pub format: String,
    #[prost(string, tag = "4")]
    pub prefix: String,
    #[prost(string, tag = "5")]
    pub text: String,
    #[prost(string, tag = "6")]
    pub location: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CUserMsgTextMsg {
    #[prost(uint32, tag = "1")]
    pub dest: u32,
    #[prost(string, repeated, tag = "2")]
    pub param: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CUserMsgSendAudio {
    #[prost(bool, tag = "2")]
    pub stop: bool,
    #[prost(string, tag = "3")]
    pub name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CdotaUserMsgChatEvent {
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(uint32, tag = "2")]
    pub value: u32,
    #[prost(sint32, tag = "3")]
    pub playerid_1: i32,
    #[prost(sint32, tag = "4")]
    pub playerid_2: i32,
    #[prost(sint32, tag = "5")]
    pub playerid_3: i32,
    #[prost(sint32, tag = "6")]
    pub playerid_4: i32,
    #[prost(sint32, tag = "7")]
    pub playerid_5: i32,
    #[prost(sint32, tag = "8")]
    pub playerid_6: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CdotaUserMsgCombatLogData {
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(uint32, tag = "2")]
    pub target_name: u32,
    #[prost(uint32, tag = "3")]
    pub attacker_name: u32,
    #[prost(bool, tag = "4")]
    pub attacker_illusion: bool,
    #[prost(bool, tag = "5")]
    pub target_illusion: bool,
    #[prost(uint32, tag = "6")]
    pub inflictor_name: u32,
    #[prost(int32, tag = "7")]
    pub value: i32,
    #[prost(int32, tag = "8")]
    pub health: i32,
    #[prost(float, tag = "9")]
    pub time: f32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CdotaUserMsgLocationPing {
    #[prost(uint32, tag = "1")]
    pub player_id: u32,
    #[prost(message, optional, tag = "2")]
    pub location_ping: Option<CdotaMsgLocationPing>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CdotaMsgLocationPing {
    #[prost(int32, tag = "1")]
    pub x: i32,
    #[prost(int32, tag = "2")]
    pub y: i32,
    #[prost(int32, tag = "3")]
    pub target: i32,
    #[prost(bool, tag = "4")]
    pub direct_ping: bool,
    #[prost(int32, tag = "5")]
    pub r#type: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CdotaUserMsgMinimapEvent {
    #[prost(int32, tag = "1")]
    pub event_type: i32,
    #[prost(int32, tag = "2")]
    pub entity_handle: i32,
    #[prost(int32, tag = "3")]
    pub x: i32,
    #[prost(int32, tag = "4")]
    pub y: i32,
    #[prost(int32, tag = "5")]
    pub duration: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CdotaUserMsgOverheadEvent {
    #[prost(int32, tag = "1")]
    pub message_type: i32,
    #[prost(int32, tag = "2")]
    pub value: i32,
    #[prost(int32, tag = "3")]
    pub target_player_entindex: i32,
    #[prost(int32, tag = "4")]
    pub target_entindex: i32,
    #[prost(int32, tag = "5")]
    pub source_player_entindex: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CdotaUserMsgSpectatorPlayerClick {
    #[prost(int32, tag = "1")]
    pub entindex: i32,
    #[prost(int32, tag = "2")]
    pub order_type: i32,
    #[prost(int32, tag = "3")]
    pub target_index: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CdotaUserMsgHudError {
    #[prost(int32, tag = "1")]
    pub order_id: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CdotaUserMsgItemPurchased {
    #[prost(int32, tag = "1")]
    pub item_index: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct CdotaUserMsgChatWheel {
    #[prost(int32, tag = "1")]
    pub chat_message: i32,
    #[prost(uint32, tag = "2")]
    pub player_id: u32,
    #[prost(uint32, tag = "3")]
    pub account_id: u32,
}
