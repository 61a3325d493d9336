//! Replay wire protocol.
//!
//! Two framing levels share one cursor type:
//! - outer frames: kind (with compression flag), tick, size-prefixed payload
//! - inner packet records: kind, size-prefixed payload
//!
//! All readers are panic-free: malformed input is reported as `DemError`
//! instead of panicking or indexing raw buffers.

pub mod cursor;
pub mod frame;
pub mod kinds;
pub mod packet;
pub mod writer;

pub use cursor::Cursor;
pub use frame::{DemoHeader, Frame, FrameReader, DEMO_MAGIC};
pub use kinds::{DemoKind, NetKind, UserKind, DEM_IS_COMPRESSED};
pub use packet::{PacketReader, PacketRecord};
