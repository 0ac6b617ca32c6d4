//! Terminal input module
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] commands.
//! Pure mapping, no state: repeat handling is left to the terminal and the
//! core rejects whatever does not apply in the current game state.

pub mod map;

pub use map::{handle_key_event, should_quit};
