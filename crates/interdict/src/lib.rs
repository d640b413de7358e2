//! Top-level facade crate for interdict.
//!
//! Re-exports core types and the engine library so hosts can depend on a single crate.

pub mod core {
    pub use interdict_core::*;
}

pub mod engine {
    pub use interdict_engine::*;
}
