//! Packet dispatch: embedded record streams, user messages, game events.

pub mod packet;
