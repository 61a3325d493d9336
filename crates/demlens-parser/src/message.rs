//! Tagged union of everything the engine announces, and its dispatch key.

use std::fmt;

use demlens_core::proto::{DemoMessage, NetMessage, UserMessage};
use demlens_core::protocol::kinds::{DemoKind, NetKind, UserKind};

use crate::schema::GameEvent;

/// A decoded message at any nesting level.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Outer frame payload.
    Demo(DemoMessage),
    /// Record of an embedded packet stream.
    Net(NetMessage),
    /// Blob of a `CSVCMsg_UserMessage`.
    User(UserMessage),
    /// Event record typed through its descriptor.
    GameEvent(GameEvent),
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Demo(m) => MessageKind::Demo(m.kind()),
            Message::Net(m) => MessageKind::Net(m.kind()),
            Message::User(m) => MessageKind::User(m.kind()),
            Message::GameEvent(_) => MessageKind::GameEvent,
        }
    }
}

/// Hook registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKind {
    Demo(DemoKind),
    Net(NetKind),
    User(UserKind),
    GameEvent,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Demo(k) => k.fmt(f),
            MessageKind::Net(k) => k.fmt(f),
            MessageKind::User(k) => k.fmt(f),
            MessageKind::GameEvent => f.write_str("GameEvent"),
        }
    }
}
