//! Color-matching falling-block puzzle for the terminal.
//!
//! Small blocks fall into a 10x20 grid; same-colored runs of three or more
//! clear, gravity compacts the columns, and chain reactions re-check until
//! the grid is stable.
//!
//! The crate is split the same way the game is:
//!
//! - [`core`]: grid, collision, active piece, clearing/gravity, scoring, and
//!   the game state machine. Pure and deterministic.
//! - [`input`]: maps terminal key events to [`types::GameAction`] commands.
//! - [`term`]: framebuffer-based terminal rendering of the core state.
//! - [`types`]: shared constants and the action enum.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
