//! Per-run decode counters.
//!
//! Single-threaded: the engine and its internal stats hook share one
//! `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;

use demlens_core::error::Result;

use crate::hooks::Hook;
use crate::message::{Message, MessageKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    pub frames: u64,
    pub compressed_frames: u64,
    /// Announced messages keyed by kind name.
    pub messages: BTreeMap<String, u64>,
    pub events_resolved: u64,
    pub events_skipped: u64,
    pub schema_installs: u64,
}

impl DecodeStats {
    pub fn record(&mut self, kind: MessageKind) {
        *self.messages.entry(kind.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, kind: MessageKind) -> u64 {
        self.messages.get(&kind.to_string()).copied().unwrap_or(0)
    }
}

/// Internal-tier hook counting every announced message.
pub(crate) struct StatsHook {
    stats: Rc<RefCell<DecodeStats>>,
}

impl StatsHook {
    pub(crate) fn new(stats: Rc<RefCell<DecodeStats>>) -> Self {
        Self { stats }
    }
}

impl Hook for StatsHook {
    fn on_message(&mut self, msg: &Message) -> Result<()> {
        self.stats.borrow_mut().record(msg.kind());
        Ok(())
    }
}
