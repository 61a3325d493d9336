//! Game event schemas learned from the stream.
//!
//! Descriptors arrive in a `CSVCMsg_GameEventList`; later `CSVCMsg_GameEvent`
//! records carry only an id and positional keys, so they can only be typed
//! once their descriptor is known.

pub mod event;
pub mod registry;

pub use event::{EventDescriptor, EventField, EventFieldType, EventValue, GameEvent};
pub use registry::{InstallReport, SchemaRegistry};
