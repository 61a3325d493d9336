//! demlens parser library entry.
//!
//! This crate wires the core wire primitives into a single-pass decode
//! engine: frames are pulled from the outer stream, packet payloads are
//! walked recursively, game events are typed through the schema registry,
//! and every decoded message is announced to the hook registry. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod config;
pub mod dispatch;
pub mod hooks;
pub mod message;
pub mod parser;
pub mod schema;
pub mod stats;

pub use config::{ParserConfig, Verbosity};
pub use hooks::{Hook, HookRegistry, Tier};
pub use message::{Message, MessageKind};
pub use parser::{ParseSummary, Parser};
pub use schema::{EventDescriptor, EventFieldType, EventValue, GameEvent, SchemaRegistry};
pub use stats::DecodeStats;
