//! Shared types and constants.
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they are usable
//! from the core logic, the input layer, and the terminal renderer alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: origin at (4, 0), the horizontal center for a
//!   2x2 shape
//!
//! # Game Timing
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `BASE_FALL_INTERVAL_MS` | 1000 | Fall interval at level 1 |
//! | `FALL_SPEEDUP_PER_LEVEL_MS` | 100 | Interval reduction per level |
//! | `MIN_FALL_INTERVAL_MS` | 200 | Fall interval floor |
//! | `CHAIN_STEP_MS` | 100 | Delay between chain-reaction passes |
//!
//! # Scoring
//!
//! - Each cleared cell is worth `10 * level` points.
//! - A successful manual soft drop is worth a flat 1 point.
//! - The level advances when `score >= level * 500`, checked once per
//!   clearing pass.

/// Grid width in cells (10 columns).
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows).
pub const GRID_HEIGHT: u8 = 20;

/// Number of block colors. Cell values range over `1..=COLOR_COUNT`.
pub const COLOR_COUNT: u8 = 6;

/// Cell value for an empty grid cell.
pub const EMPTY_CELL: u8 = 0;

/// Minimum length of a same-color run that clears.
pub const MIN_RUN_LEN: usize = 3;

/// Fixed timestep interval in milliseconds (16ms, roughly 60 FPS).
pub const TICK_MS: u32 = 16;

/// Fall interval at level 1 (one automatic fall step per second).
pub const BASE_FALL_INTERVAL_MS: u32 = 1000;

/// How much faster each level falls.
pub const FALL_SPEEDUP_PER_LEVEL_MS: u32 = 100;

/// The fall interval never drops below this floor.
pub const MIN_FALL_INTERVAL_MS: u32 = 200;

/// Delay between chain-reaction clearing passes.
pub const CHAIN_STEP_MS: u32 = 100;

/// Points per cleared cell, multiplied by the current level.
pub const CLEAR_SCORE_PER_CELL: u32 = 10;

/// Flat bonus for a successful manual soft-drop step.
pub const SOFT_DROP_SCORE: u32 = 1;

/// Score step between level thresholds (level-up at `level * 500`).
pub const LEVEL_SCORE_STEP: u32 = 500;

/// Commands the game accepts from an input adapter.
///
/// Gameplay commands are rejected while the game is not running or is
/// paused; [`GameAction::TogglePause`] only requires a running game, and
/// [`GameAction::Start`]/[`GameAction::Restart`] manage the session itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the active piece one cell left.
    MoveLeft,
    /// Move the active piece one cell right.
    MoveRight,
    /// Drop the active piece one cell down (with soft-drop scoring).
    SoftDrop,
    /// Rotate the active piece 90 degrees clockwise.
    Rotate,
    /// Toggle the pause state.
    TogglePause,
    /// Start a new game when idle or after game over.
    Start,
    /// Restart the game from any state.
    Restart,
}
