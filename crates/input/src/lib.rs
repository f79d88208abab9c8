//! Terminal input module (driver-facing).
//!
//! Maps `crossterm` key events into driver [`Action`]s. There is no key-repeat
//! handling here: each key press is one logical event.

pub mod map;

pub use blockfall_engine::Action;
pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
