//! Wire message schemas and the tagged unions the codec decodes into.
//!
//! Each union variant corresponds to exactly one entry of the kind tables in
//! [`crate::protocol::kinds`]; `kind()` recovers the dispatch key without any
//! runtime type inspection.

pub mod demo;
pub mod net;
pub mod user;

use bytes::Bytes;

use crate::protocol::kinds::{DemoKind, NetKind, UserKind};

use demo::*;
use net::*;
use user::*;

/// Decoded outer frame payload.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoMessage {
    Stop(CDemoStop),
    FileHeader(CDemoFileHeader),
    FileInfo(CDemoFileInfo),
    SyncTick(CDemoSyncTick),
    SendTables(CDemoSendTables),
    ClassInfo(CDemoClassInfo),
    StringTables(CDemoStringTables),
    Packet(CDemoPacket),
    SignonPacket(CDemoPacket),
    ConsoleCmd(CDemoConsoleCmd),
    CustomData(CDemoCustomData),
    CustomDataCallbacks(CDemoCustomDataCallbacks),
    UserCmd(CDemoUserCmd),
    FullPacket(CDemoFullPacket),
}

impl DemoMessage {
    pub fn kind(&self) -> DemoKind {
        match self {
            DemoMessage::Stop(_) => DemoKind::Stop,
            DemoMessage::FileHeader(_) => DemoKind::FileHeader,
            DemoMessage::FileInfo(_) => DemoKind::FileInfo,
            DemoMessage::SyncTick(_) => DemoKind::SyncTick,
            DemoMessage::SendTables(_) => DemoKind::SendTables,
            DemoMessage::ClassInfo(_) => DemoKind::ClassInfo,
            DemoMessage::StringTables(_) => DemoKind::StringTables,
            DemoMessage::Packet(_) => DemoKind::Packet,
            DemoMessage::SignonPacket(_) => DemoKind::SignonPacket,
            DemoMessage::ConsoleCmd(_) => DemoKind::ConsoleCmd,
            DemoMessage::CustomData(_) => DemoKind::CustomData,
            DemoMessage::CustomDataCallbacks(_) => DemoKind::CustomDataCallbacks,
            DemoMessage::UserCmd(_) => DemoKind::UserCmd,
            DemoMessage::FullPacket(_) => DemoKind::FullPacket,
        }
    }

    /// Embedded inner packet stream, if this message carries one.
    ///
    /// Packets hold it directly; full packets hold it one envelope deeper.
    pub fn embedded_packet(&self) -> Option<&Bytes> {
        match self {
            DemoMessage::Packet(p) | DemoMessage::SignonPacket(p) => Some(&p.data),
            DemoMessage::FullPacket(full) => full.packet.as_ref().map(|p| &p.data),
            _ => None,
        }
    }
}

/// Decoded inner packet record.
#[derive(Debug, Clone, PartialEq)]
pub enum NetMessage {
    Nop(CnetMsgNop),
    Disconnect(CnetMsgDisconnect),
    File(CnetMsgFile),
    SplitScreenUser(CnetMsgSplitScreenUser),
    Tick(CnetMsgTick),
    StringCmd(CnetMsgStringCmd),
    SetConVar(CnetMsgSetConVar),
    SignonState(CnetMsgSignonState),
    ServerInfo(CsvcMsgServerInfo),
    SendTable(CsvcMsgSendTable),
    ClassInfo(CsvcMsgClassInfo),
    SetPause(CsvcMsgSetPause),
    CreateStringTable(CsvcMsgCreateStringTable),
    UpdateStringTable(CsvcMsgUpdateStringTable),
    VoiceInit(CsvcMsgVoiceInit),
    VoiceData(CsvcMsgVoiceData),
    Print(CsvcMsgPrint),
    Sounds(CsvcMsgSounds),
    SetView(CsvcMsgSetView),
    FixAngle(CsvcMsgFixAngle),
    CrosshairAngle(CsvcMsgCrosshairAngle),
    BspDecal(CsvcMsgBspDecal),
    SplitScreen(CsvcMsgSplitScreen),
    UserMessage(CsvcMsgUserMessage),
    EntityMessage(CsvcMsgEntityMessage),
    GameEvent(CsvcMsgGameEvent),
    PacketEntities(CsvcMsgPacketEntities),
    TempEntities(CsvcMsgTempEntities),
    Prefetch(CsvcMsgPrefetch),
    Menu(CsvcMsgMenu),
    GameEventList(CsvcMsgGameEventList),
    GetCvarValue(CsvcMsgGetCvarValue),
}

impl NetMessage {
    pub fn kind(&self) -> NetKind {
        match self {
            NetMessage::Nop(_) => NetKind::Nop,
            NetMessage::Disconnect(_) => NetKind::Disconnect,
            NetMessage::File(_) => NetKind::File,
            NetMessage::SplitScreenUser(_) => NetKind::SplitScreenUser,
            NetMessage::Tick(_) => NetKind::Tick,
            NetMessage::StringCmd(_) => NetKind::StringCmd,
            NetMessage::SetConVar(_) => NetKind::SetConVar,
            NetMessage::SignonState(_) => NetKind::SignonState,
            NetMessage::ServerInfo(_) => NetKind::ServerInfo,
            NetMessage::SendTable(_) => NetKind::SendTable,
            NetMessage::ClassInfo(_) => NetKind::ClassInfo,
            NetMessage::SetPause(_) => NetKind::SetPause,
            NetMessage::CreateStringTable(_) => NetKind::CreateStringTable,
            NetMessage::UpdateStringTable(_) => NetKind::UpdateStringTable,
            NetMessage::VoiceInit(_) => NetKind::VoiceInit,
            NetMessage::VoiceData(_) => NetKind::VoiceData,
            NetMessage::Print(_) => NetKind::Print,
            NetMessage::Sounds(_) => NetKind::Sounds,
            NetMessage::SetView(_) => NetKind::SetView,
            NetMessage::FixAngle(_) => NetKind::FixAngle,
            NetMessage::CrosshairAngle(_) => NetKind::CrosshairAngle,
            NetMessage::BspDecal(_) => NetKind::BspDecal,
            NetMessage::SplitScreen(_) => NetKind::SplitScreen,
            NetMessage::UserMessage(_) => NetKind::UserMessage,
            NetMessage::EntityMessage(_) => NetKind::EntityMessage,
            NetMessage::GameEvent(_) => NetKind::GameEvent,
            NetMessage::PacketEntities(_) => NetKind::PacketEntities,
            NetMessage::TempEntities(_) => NetKind::TempEntities,
            NetMessage::Prefetch(_) => NetKind::Prefetch,
            NetMessage::Menu(_) => NetKind::Menu,
            NetMessage::GameEventList(_) => NetKind::GameEventList,
            NetMessage::GetCvarValue(_) => NetKind::GetCvarValue,
        }
    }
}

/// Decoded user message.
#[derive(Debug, Clone, PartialEq)]
pub enum UserMessage {
    AchievementEvent(CUserMsgAchievementEvent),
    HintText(CUserMsgHintText),
    SayText(CUserMsgSayText),
    SayText2(CUserMsgSayText2),
    TextMsg(CUserMsgTextMsg),
    SendAudio(CUserMsgSendAudio),
    ChatEvent(CdotaUserMsgChatEvent),
    CombatLogData(CdotaUserMsgCombatLogData),
    LocationPing(CdotaUserMsgLocationPing),
    MinimapEvent(CdotaUserMsgMinimapEvent),
    OverheadEvent(CdotaUserMsgOverheadEvent),
    SpectatorPlayerClick(CdotaUserMsgSpectatorPlayerClick),
    HudError(CdotaUserMsgHudError),
    ItemPurchased(CdotaUserMsgItemPurchased),
    ChatWheel(CdotaUserMsgChatWheel),
    /// Known kind without a structured schema.
    Raw { kind: UserKind, data: Bytes },
}

impl UserMessage {
    pub fn kind(&self) -> UserKind {
        match self {
            UserMessage::AchievementEvent(_) => UserKind::AchievementEvent,
            UserMessage::HintText(_) => UserKind::HintText,
            UserMessage::SayText(_) => UserKind::SayText,
            UserMessage::SayText2(_) => UserKind::SayText2,
            UserMessage::TextMsg(_) => UserKind::TextMsg,
            UserMessage::SendAudio(_) => UserKind::SendAudio,
            UserMessage::ChatEvent(_) => UserKind::ChatEvent,
            UserMessage::CombatLogData(_) => UserKind::CombatLogData,
            UserMessage::LocationPing(_) => UserKind::LocationPing,
            UserMessage::MinimapEvent(_) => UserKind::MinimapEvent,
            UserMessage::OverheadEvent(_) => UserKind::OverheadEvent,
            UserMessage::SpectatorPlayerClick(_) => UserKind::SpectatorPlayerClick,
            UserMessage::HudError(_) => UserKind::HudError,
            UserMessage::ItemPurchased(_) => UserKind::ItemPurchased,
            UserMessage::ChatWheel(_) => UserKind::ChatWheel,
            UserMessage::Raw { kind, .. } => *kind,
        }
    }
}
