//! RecallFlip (workspace facade crate).
//!
//! Re-exports the member crates under `recallflip::{core,input,term,types}` and
//! holds the application-level configuration and logging setup used by the
//! binary.

pub mod config;
pub mod logging;

pub use recallflip_core as core;
pub use recallflip_input as input;
pub use recallflip_term as term;
pub use recallflip_types as types;
