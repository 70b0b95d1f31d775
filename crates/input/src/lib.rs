//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::Command`] and rate-limits
//! held keys with a [`RepeatGate`]. The session itself never sees raw keys.

pub mod gate;
pub mod map;

pub use blockfall_types as types;

pub use gate::{CommandBatch, RepeatGate};
pub use map::command_for_key;
