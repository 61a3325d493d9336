//! Single-pass decode engine.
//!
//! Frames are pulled lazily from the outer stream; packet-bearing frames are
//! handed to the packet dispatcher before the frame itself is announced, so
//! hooks for a container run after hooks for its contents.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use bytes::Bytes;

use demlens_core::codec::{Codec, ProtoCodec};
use demlens_core::error::{DemError, Result};
use demlens_core::proto::DemoMessage;
use demlens_core::protocol::frame::{DemoHeader, Frame, FrameReader};

use crate::config::{ParserConfig, Verbosity};
use crate::hooks::{HookRegistry, Tier};
use crate::message::{Message, MessageKind};
use crate::schema::{GameEvent, SchemaRegistry};
use crate::stats::{DecodeStats, StatsHook};

/// Result of one decode run.
#[derive(Debug)]
pub struct ParseSummary {
    pub header: DemoHeader,
    /// Frames decoded.
    pub frames: usize,
    /// Tick of the last decoded frame.
    pub last_tick: u64,
    /// Recoverable per-event failures, in stream order.
    pub skipped: Vec<DemError>,
    /// Resolved game events when `collect_events` is set.
    pub events: Vec<GameEvent>,
    pub stats: DecodeStats,
}

/// Mutable state scoped to one `parse` call.
#[derive(Debug, Default)]
pub(crate) struct RunState {
    pub(crate) tick: u64,
    pub(crate) skipped: Vec<DemError>,
    pub(crate) events: Vec<GameEvent>,
}

/// Replay decoder. Each instance owns its schema and hook registries.
pub struct Parser<C = ProtoCodec> {
    pub(crate) config: ParserConfig,
    pub(crate) codec: C,
    pub(crate) schemas: SchemaRegistry,
    pub(crate) hooks: HookRegistry,
    pub(crate) stats: Rc<RefCell<DecodeStats>>,
}

impl Parser<ProtoCodec> {
    pub fn new(config: ParserConfig) -> Self {
        Self::with_codec(config, ProtoCodec)
    }
}

impl<C: Codec + Clone> Parser<C> {
    /// Build an engine over a custom codec gateway.
    pub fn with_codec(config: ParserConfig, codec: C) -> Self {
        let stats = Rc::new(RefCell::new(DecodeStats::default()));
        let mut hooks = HookRegistry::new();
        hooks.register_any_hook(Tier::Internal, StatsHook::new(Rc::clone(&stats)));

        Self {
            config,
            codec,
            schemas: SchemaRegistry::new(),
            hooks,
            stats,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    /// Shorthand for an external hook on `kind`.
    pub fn register<F>(&mut self, kind: MessageKind, f: F)
    where
        F: FnMut(&Message) -> Result<()> + 'static,
    {
        self.hooks.register(kind, f);
    }

    /// Schemas learned so far in the current (or last) run.
    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    pub fn stats(&self) -> DecodeStats {
        self.stats.borrow().clone()
    }

    /// Read a replay file fully, then decode it.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<ParseSummary> {
        let path = path.as_ref();
        if self.config.verbosity.at_least(Verbosity::INFO) {
            tracing::info!(path = %path.display(), "parsing demo file");
        }
        let data = std::fs::read(path)?;
        self.parse(Bytes::from(data))
    }

    /// Decode a fully materialized replay.
    ///
    /// Schemas and stats start empty for every call; hooks persist.
    pub fn parse(&mut self, data: Bytes) -> Result<ParseSummary> {
        let span = tracing::info_span!("demo", bytes = data.len());
        let _guard = span.enter();

        self.schemas.clear();
        *self.stats.borrow_mut() = DecodeStats::default();

        let mut frames =
            FrameReader::open(data, self.codec.clone())?.with_limit(self.config.max_frames);
        let header = frames.header();
        if self.config.verbosity.at_least(Verbosity::DEBUG) {
            tracing::debug!(info_offset = header.info_offset, "header ok");
        }

        let mut run = RunState::default();
        for frame in &mut frames {
            self.on_frame(frame?, &mut run)?;
        }

        let summary = ParseSummary {
            header,
            frames: frames.frames_read(),
            last_tick: run.tick,
            skipped: run.skipped,
            events: run.events,
            stats: self.stats(),
        };
        if self.config.verbosity.at_least(Verbosity::INFO) {
            tracing::info!(
                frames = summary.frames,
                skipped = summary.skipped.len(),
                "demo parsed"
            );
        }
        Ok(summary)
    }

    fn on_frame(&mut self, frame: Frame, run: &mut RunState) -> Result<()> {
        run.tick = frame.tick;
        {
            let mut stats = self.stats.borrow_mut();
            stats.frames += 1;
            if frame.compressed {
                stats.compressed_frames += 1;
            }
        }

        let verbosity = self.config.verbosity;
        if verbosity.at_least(Verbosity::INFO) {
            tracing::info!(tick = frame.tick, compressed = frame.compressed, "{}: {}", frame.index, frame.kind);
        }
        let demo = self.codec.decode_demo(frame.kind, frame.payload)?;
        if verbosity.at_least(Verbosity::WORTHLESS) {
            tracing::trace!(message = ?demo);
        }

        if let DemoMessage::FullPacket(full) = &demo {
            if verbosity.at_least(Verbosity::DEBUG) {
                tracing::debug!(
                    tables = full.string_table.as_ref().map_or(0, |t| t.tables.len()),
                    "full packet string tables"
                );
            }
        }
        if frame.kind.carries_packet() {
            match demo.embedded_packet().cloned() {
                Some(data) => self.dispatch_packet(data, run)?,
                None if verbosity.at_least(Verbosity::DEBUG) => {
                    tracing::debug!(kind = %frame.kind, "packet frame without inner stream");
                }
                None => {}
            }
        }

        self.hooks.dispatch(&Message::Demo(demo))
    }
}
