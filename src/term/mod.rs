//! Terminal rendering module
//!
//! A small, game-oriented rendering layer: the core state is mapped into a
//! framebuffer of styled character cells, and the framebuffer is flushed to
//! the terminal with diff-based redraws.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the color palette here, not in the core (the core only knows
//!   color indices)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
