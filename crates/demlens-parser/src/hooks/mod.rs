//! Hook module exports.
//!
//! Re-exports the hook registry and observer trait so downstream consumers can
//! depend on this module directly.

pub mod registry;

pub use registry::{Hook, HookRegistry, Tier};
