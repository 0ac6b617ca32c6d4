//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed replays an identical game
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: runs in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: the fixed 10x20 cell matrix
//! - [`collision`]: pure shape-versus-grid overlap test
//! - [`shapes`]: 2x2 block templates and rotation
//! - [`piece`]: the active falling piece
//! - [`clearing`]: run detection, clearing, and gravity compaction
//! - [`scoring`]: score, level thresholds, fall-interval derivation
//! - [`rng`]: deterministic piece selection
//! - [`game_state`]: the state machine tying everything together

pub mod clearing;
pub mod collision;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;

// Re-export commonly used types
pub use collision::collides;
pub use game_state::GameState;
pub use grid::Grid;
pub use piece::ActivePiece;
pub use rng::SimpleRng;
pub use shapes::{rotate_cw, ShapeGrid};
