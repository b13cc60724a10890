//! Solfa CLI library.
//!
//! Settings persistence, playback hand-off, and the command implementations
//! behind the `solfa` binary.

pub mod commands;
pub mod playback;
pub mod settings_store;
