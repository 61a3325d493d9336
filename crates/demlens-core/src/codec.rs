//! Message codec gateway: payload bytes of a known kind -> structured message.
//!
//! - `decompress` inflates snappy-compressed outer payloads
//! - `decode_*` map a kind-table entry to its wire schema (prost)
//!
//! User message blobs are decoded as is: their length is already exact, so no
//! size prefix precedes them.

use bytes::Bytes;
use prost::Message;

use crate::error::{DemError, Result};
use crate::proto::demo::{CDemoFullPacket, CDemoPacket};
use crate::proto::net::CnetMsgNop;
use crate::proto::{DemoMessage, NetMessage, UserMessage};
use crate::protocol::kinds::{DemoKind, NetKind, UserKind};

/// Decode capability the engine depends on.
pub trait Codec {
    fn decompress(&self, payload: &[u8]) -> Result<Bytes>;
    fn decode_demo(&self, kind: DemoKind, payload: Bytes) -> Result<DemoMessage>;
    fn decode_net(&self, kind: NetKind, payload: Bytes) -> Result<NetMessage>;
    fn decode_user(&self, kind: UserKind, payload: Bytes) -> Result<UserMessage>;
}

/// Default gateway: prost schemas + raw snappy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoCodec;

fn decode<M: Message + Default>(kind: &'static str, payload: Bytes) -> Result<M> {
    M::decode(payload).map_err(|source| DemError::Decode { kind, source })
}

impl Codec for ProtoCodec {
    fn decompress(&self, payload: &[u8]) -> Result<Bytes> {
        snap::raw::Decoder::new()
            .decompress_vec(payload)
            .map(Bytes::from)
            .map_err(|e| DemError::Decompress(e.to_string()))
    }

    fn decode_demo(&self, kind: DemoKind, payload: Bytes) -> Result<DemoMessage> {
        let name = kind.name();
        Ok(match kind {
            DemoKind::Stop => DemoMessage::Stop(decode(name, payload)?),
            DemoKind::FileHeader => DemoMessage::FileHeader(decode(name, payload)?),
            DemoKind::FileInfo => DemoMessage::FileInfo(decode(name, payload)?),
            DemoKind::SyncTick => DemoMessage::SyncTick(decode(name, payload)?),
            DemoKind::SendTables => DemoMessage::SendTables(decode(name, payload)?),
            DemoKind::ClassInfo => DemoMessage::ClassInfo(decode(name, payload)?),
            DemoKind::StringTables => DemoMessage::StringTables(decode(name, payload)?),
            DemoKind::Packet => DemoMessage::Packet(decode::<CDemoPacket>(name, payload)?),
            DemoKind::SignonPacket => {
                DemoMessage::SignonPacket(decode::<CDemoPacket>(name, payload)?)
            }
            DemoKind::ConsoleCmd => DemoMessage::ConsoleCmd(decode(name, payload)?),
            DemoKind::CustomData => DemoMessage::CustomData(decode(name, payload)?),
            DemoKind::CustomDataCallbacks => {
                DemoMessage::CustomDataCallbacks(decode(name, payload)?)
            }
            DemoKind::UserCmd => DemoMessage::UserCmd(decode(name, payload)?),
            DemoKind::FullPacket => DemoMessage::FullPacket(decode::<CDemoFullPacket>(name, payload)?),
        })
    }

    fn decode_net(&self, kind: NetKind, payload: Bytes) -> Result<NetMessage> {
        let name = kind.name();
        Ok(match kind {
            NetKind::Nop => NetMessage::Nop(decode::<CnetMsgNop>(name, payload)?),
            NetKind::Disconnect => NetMessage::Disconnect(decode(name, payload)?),
            NetKind::File => NetMessage::File(decode(name, payload)?),
            NetKind::SplitScreenUser => NetMessage::SplitScreenUser(decode(name, payload)?),
            NetKind::Tick => NetMessage::Tick(decode(name, payload)?),
            NetKind::StringCmd => NetMessage::StringCmd(decode(name, payload)?),
            NetKind::SetConVar => NetMessage::SetConVar(decode(name, payload)?),
            NetKind::SignonState => NetMessage::SignonState(decode(name, payload)?),
            NetKind::ServerInfo => NetMessage::ServerInfo(decode(name, payload)?),
            NetKind::SendTable => NetMessage::SendTable(decode(name, payload)?),
            NetKind::ClassInfo => NetMessage::ClassInfo(decode(name, payload)?),
            NetKind::SetPause => NetMessage::SetPause(decode(name, payload)?),
            NetKind::CreateStringTable => NetMessage::CreateStringTable(decode(name, payload)?),
            NetKind::UpdateStringTable => NetMessage::UpdateStringTable(decode(name, payload)?),
            NetKind::VoiceInit => NetMessage::VoiceInit(decode(name, payload)?),
            NetKind::VoiceData => NetMessage::VoiceData(decode(name, payload)?),
            NetKind::Print => NetMessage::Print(decode(name, payload)?),
            NetKind::Sounds => NetMessage::Sounds(decode(name, payload)?),
            NetKind::SetView => NetMessage::SetView(decode(name, payload)?),
            NetKind::FixAngle => NetMessage::FixAngle(decode(name, payload)?),
            NetKind::CrosshairAngle => NetMessage::CrosshairAngle(decode(name, payload)?),
            NetKind::BspDecal => NetMessage::BspDecal(decode(name, payload)?),
            NetKind::SplitScreen => NetMessage::SplitScreen(decode(name, payload)?),
            NetKind::UserMessage => NetMessage::UserMessage(decode(name, payload)?),
            NetKind::EntityMessage => NetMessage::EntityMessage(decode(name, payload)?),
            NetKind::GameEvent => NetMessage::GameEvent(decode(name, payload)?),
            NetKind::PacketEntities => NetMessage::PacketEntities(decode(name, payload)?),
            NetKind::TempEntities => NetMessage::TempEntities(decode(name, payload)?),
            NetKind::Prefetch => NetMessage::Prefetch(decode(name, payload)?),
            NetKind::Menu => NetMessage::Menu(decode(name, payload)?),
            NetKind::GameEventList => NetMessage::GameEventList(decode(name, payload)?),
            NetKind::GetCvarValue => NetMessage::GetCvarValue(decode(name, payload)?),
        })
    }

    fn decode_user(&self, kind: UserKind, payload: Bytes) -> Result<UserMessage> {
        let name = kind.name();
        Ok(match kind {
            UserKind::AchievementEvent => UserMessage::AchievementEvent(decode(name, payload)?),
            UserKind::HintText => UserMessage::HintText(decode(name, payload)?),
            UserKind::SayText => UserMessage::SayText(decode(name, payload)?),
            UserKind::SayText2 => UserMessage::SayText2(decode(name, payload)?),
            UserKind::TextMsg => UserMessage::TextMsg(decode(name, payload)?),
            UserKind::SendAudio => UserMessage::SendAudio(decode(name, payload)?),
            UserKind::ChatEvent => UserMessage::ChatEvent(decode(name, payload)?),
            UserKind::CombatLogData => UserMessage::CombatLogData(decode(name, payload)?),
            UserKind::LocationPing => UserMessage::LocationPing(decode(name, payload)?),
            UserKind::MinimapEvent => UserMessage::MinimapEvent(decode(name, payload)?),
            UserKind::OverheadEvent => UserMessage::OverheadEvent(decode(name, payload)?),
            UserKind::SpectatorPlayerClick => {
                UserMessage::SpectatorPlayerClick(decode(name, payload)?)
            }
            UserKind::HudError => UserMessage::HudError(decode(name, payload)?),
            UserKind::ItemPurchased => UserMessage::ItemPurchased(decode(name, payload)?),
            UserKind::ChatWheel => UserMessage::ChatWheel(decode(name, payload)?),
            other => UserMessage::Raw {
                kind: other,
                data: payload,
            },
        })
    }
}
