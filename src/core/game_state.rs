//! Game state module - owns the grid, the active piece, and the scheduler
//!
//! This module ties the core components together: grid, collision, active
//! piece, clearing/gravity, and scoring. It is the single mutator of game
//! state; input commands and the fixed-timestep tick both funnel through it,
//! one at a time.
//!
//! # Lifecycle
//!
//! `Idle -> Running <-> Paused -> GameOver`, with restart available from any
//! state. A game ends only when a freshly spawned piece collides at the
//! spawn position.
//!
//! # Scheduling
//!
//! Callers drive the state with [`GameState::tick`] at a fixed timestep.
//! The automatic fall step fires whenever the fall accumulator reaches the
//! current fall interval; a level-up resets the accumulator so the new rate
//! takes effect immediately. Chain-reaction clearing passes are deferred by
//! [`CHAIN_STEP_MS`] of game time each, so commands (a pause request, a
//! sideways move) are observed between passes while each pass itself stays
//! atomic.

use crate::core::clearing::{apply_gravity, clear_runs};
use crate::core::collision::collides;
use crate::core::grid::Grid;
use crate::core::piece::ActivePiece;
use crate::core::rng::SimpleRng;
use crate::core::scoring::{clear_pass_score, fall_interval_ms, level_up_due};
use crate::core::shapes::rotate_cw;
use crate::types::{GameAction, CHAIN_STEP_MS, SOFT_DROP_SCORE};

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    score: u32,
    level: u32,
    fall_interval_ms: u32,
    /// Milliseconds accumulated toward the next automatic fall step.
    fall_timer_ms: u32,
    /// Countdown to the next chain-reaction pass; `None` when no chain is
    /// pending.
    chain_timer_ms: Option<u32>,
    running: bool,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new idle game with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            rng: SimpleRng::new(seed),
            score: 0,
            level: 1,
            fall_interval_ms: fall_interval_ms(1),
            fall_timer_ms: 0,
            chain_timer_ms: None,
            running: false,
            paused: false,
            game_over: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Start a fresh game. No-op while a game is already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.reset_session();
    }

    /// Restart from any state (running, paused, or game over).
    pub fn restart(&mut self) {
        self.reset_session();
    }

    fn reset_session(&mut self) {
        self.grid.reset();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.fall_interval_ms = fall_interval_ms(self.level);
        self.fall_timer_ms = 0;
        self.chain_timer_ms = None;
        self.running = true;
        self.paused = false;
        self.game_over = false;
        self.spawn_piece();
    }

    /// Spawn a replacement piece. A colliding spawn ends the game.
    fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(&mut self.rng);
        if !piece.fits(&self.grid) {
            self.active = None;
            self.running = false;
            self.game_over = true;
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Try to shift the active piece; commits only when collision-free.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        let (x, y) = (piece.x + dx, piece.y + dy);
        if collides(&self.grid, x, y, &piece.shape) {
            return false;
        }

        self.active = Some(ActivePiece { x, y, ..piece });
        true
    }

    /// Rotate the active piece 90 degrees clockwise in place.
    ///
    /// The shape is left unchanged when the rotated matrix would collide at
    /// the current origin; rotation is never forced or wall-kicked.
    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        let rotated = rotate_cw(&piece.shape);
        if collides(&self.grid, piece.x, piece.y, &rotated) {
            return false;
        }

        self.active = Some(ActivePiece {
            shape: rotated,
            ..piece
        });
        true
    }

    /// Write the active piece into the grid and retire it.
    ///
    /// Cells still above the visible grid are dropped.
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.grid.set(x as u8, y as u8, piece.color);
            }
        }
    }

    /// One clearing pass: detect + clear, score, level check, gravity.
    ///
    /// Re-queues itself through the chain timer while a pass keeps clearing;
    /// the score increments once per pass, not once per trigger.
    fn run_clear_pass(&mut self) {
        let cleared = clear_runs(&mut self.grid);
        if cleared == 0 {
            self.chain_timer_ms = None;
            return;
        }

        self.score += clear_pass_score(cleared, self.level);

        // One threshold check per pass, even when the score crossed several.
        if level_up_due(self.score, self.level) {
            self.level += 1;
            self.fall_interval_ms = fall_interval_ms(self.level);
            // Reschedule the fall step at the new rate immediately.
            self.fall_timer_ms = 0;
        }

        apply_gravity(&mut self.grid);
        self.chain_timer_ms = Some(CHAIN_STEP_MS);
    }

    /// Advance game time by `elapsed_ms`.
    ///
    /// Suspended entirely while paused or not running. Pending chain passes
    /// run ahead of the fall step.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.running || self.paused {
            return;
        }

        if let Some(remaining) = self.chain_timer_ms {
            let remaining = remaining.saturating_sub(elapsed_ms);
            if remaining == 0 {
                self.chain_timer_ms = None;
                self.run_clear_pass();
            } else {
                self.chain_timer_ms = Some(remaining);
            }
        }

        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms < self.fall_interval_ms {
            return;
        }
        self.fall_timer_ms = 0;

        if !self.try_move(0, 1) {
            self.lock_piece();
            self.run_clear_pass();
            self.spawn_piece();
        }
    }

    /// Apply an input command. Returns whether the command changed state.
    ///
    /// Gameplay commands are rejected while the game is not running or is
    /// paused; pause toggling only requires a running game.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                if self.running {
                    return false;
                }
                self.start();
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::TogglePause => {
                if !self.running {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            _ if !self.running || self.paused => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => {
                let moved = self.try_move(0, 1);
                if moved {
                    self.score += SOFT_DROP_SCORE;
                }
                moved
            }
            GameAction::Rotate => self.try_rotate(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
