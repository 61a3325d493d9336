use bytes::Bytes;

use demlens_core::codec::Codec;
use demlens_core::error::{DemError, Result};
use demlens_core::proto::net::{CsvcMsgGameEvent, CsvcMsgGameEventList, CsvcMsgUserMessage};
use demlens_core::proto::NetMessage;
use demlens_core::protocol::kinds::UserKind;
use demlens_core::protocol::packet::PacketReader;

use crate::config::Verbosity;
use crate::message::Message;
use crate::parser::{Parser, RunState};

impl<C: Codec + Clone> Parser<C> {
    /// Walk one embedded packet stream, announcing every record.
    pub(crate) fn dispatch_packet(&mut self, data: Bytes, run: &mut RunState) -> Result<()> {
        for record in PacketReader::new(data) {
            let record = record?;
            let msg = self.codec.decode_net(record.kind, record.payload)?;

            if self.config.verbosity.at_least(Verbosity::INFO) {
                tracing::info!("|>>> {}", record.kind);
            }
            if self.config.verbosity.at_least(Verbosity::WORTHLESS) {
                tracing::trace!(message = ?msg);
            }

            self.on_net(msg, run)?;
        }
        Ok(())
    }

    fn on_net(&mut self, msg: NetMessage, run: &mut RunState) -> Result<()> {
        match &msg {
            NetMessage::UserMessage(um) => self.on_user_message(um)?,
            NetMessage::GameEventList(list) => self.on_game_event_list(list),
            NetMessage::GameEvent(ev) => self.on_game_event(ev, run)?,
            _ => {}
        }
        self.hooks.dispatch(&Message::Net(msg))
    }

    fn on_user_message(&mut self, um: &CsvcMsgUserMessage) -> Result<()> {
        let kind = UserKind::from_id(um.msg_type)
            .ok_or(DemError::UnknownUserMessageKind(um.msg_type))?;
        let user = self.codec.decode_user(kind, um.msg_data.clone())?;

        if self.config.verbosity.at_least(Verbosity::INFO) {
            tracing::info!("|-----> {kind}");
        }
        if self.config.verbosity.at_least(Verbosity::DEBUG) {
            tracing::debug!(message = ?user);
        }

        self.hooks.dispatch(&Message::User(user))
    }

    fn on_game_event_list(&mut self, list: &CsvcMsgGameEventList) {
        let report = self.schemas.install(list);
        self.stats.borrow_mut().schema_installs += 1;

        let verbosity = self.config.verbosity;
        if verbosity.at_least(Verbosity::IMPORTANT) {
            for (event_id, tag) in &report.rejected {
                tracing::warn!(event_id, tag, "event descriptor has unknown field type; not installed");
            }
        }
        if verbosity.at_least(Verbosity::DEBUG) {
            tracing::debug!(installed = report.installed, "game event schemas installed");
        }
    }

    fn on_game_event(&mut self, ev: &CsvcMsgGameEvent, run: &mut RunState) -> Result<()> {
        match self.schemas.resolve(ev, run.tick) {
            Ok(event) => {
                if self.config.verbosity.at_least(Verbosity::DEBUG) {
                    tracing::debug!("|==========> {} {:?}", event.name, event.fields);
                }
                self.stats.borrow_mut().events_resolved += 1;
                if self.config.collect_events {
                    run.events.push(event.clone());
                }
                self.hooks.dispatch(&Message::GameEvent(event))
            }
            Err(e) if e.is_recoverable() => {
                if self.config.verbosity.at_least(Verbosity::IMPORTANT) {
                    tracing::warn!(error = %e, tick = run.tick, "skipping game event");
                }
                self.stats.borrow_mut().events_skipped += 1;
                run.skipped.push(e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
