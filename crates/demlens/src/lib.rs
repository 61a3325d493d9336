//! Top-level facade crate for demlens.
//!
//! Re-exports the wire primitives and the parse engine so users can depend on a single crate.

pub mod core {
    pub use demlens_core::*;
}

pub mod parser {
    pub use demlens_parser::*;
}
