//! tile512 (workspace facade crate).
//!
//! Re-exports the engine crates under `tile512::{core,types}` and hosts the
//! headless [`runner`] used by the default binary.

pub mod runner;

pub use tile512_core as core;
pub use tile512_types as types;
