//! demlens core: replay wire primitives, message tables, and error types.
//!
//! This crate owns everything needed to walk a recorded match replay at the
//! byte level: the bounds-checked cursor, the outer frame protocol, the inner
//! packet record grammar, the closed kind tables, and the codec gateway that
//! turns payload bytes into structured messages. It carries no engine state;
//! schema resolution and hooks live in `demlens-parser`.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Truncated or corrupt replays surface as `DemError`, never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod codec;
pub mod error;
pub mod proto;
pub mod protocol;

/// Shared result type.
pub use error::{DemError, ErrorCode, Result};
