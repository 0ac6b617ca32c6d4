//! Integration tests for the game lifecycle through the public API.

use tui_blockfall::core::GameState;
use tui_blockfall::types::GameAction;

#[test]
fn lifecycle_idle_to_running() {
    let mut game = GameState::new(12345);
    assert!(!game.running());
    assert!(game.active().is_none());

    assert!(game.apply_action(GameAction::Start));
    assert!(game.running());
    assert!(!game.paused());
    assert!(!game.game_over());
    assert!(game.active().is_some());
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.fall_interval_ms(), 1000);
}

#[test]
fn start_is_ignored_mid_game() {
    let mut game = GameState::new(12345);
    game.apply_action(GameAction::Start);
    game.apply_action(GameAction::SoftDrop);
    assert_eq!(game.score(), 1);

    assert!(!game.apply_action(GameAction::Start));
    assert_eq!(game.score(), 1);
}

#[test]
fn restart_wipes_the_session() {
    let mut game = GameState::new(12345);
    game.apply_action(GameAction::Start);
    game.apply_action(GameAction::SoftDrop);
    game.apply_action(GameAction::TogglePause);

    assert!(game.apply_action(GameAction::Restart));
    assert!(game.running());
    assert!(!game.paused());
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
}

#[test]
fn movement_commands_move_the_piece() {
    let mut game = GameState::new(12345);
    game.apply_action(GameAction::Start);
    let x0 = game.active().unwrap().x;

    assert!(game.apply_action(GameAction::MoveRight));
    assert_eq!(game.active().unwrap().x, x0 + 1);
    assert!(game.apply_action(GameAction::MoveLeft));
    assert_eq!(game.active().unwrap().x, x0);
}

#[test]
fn soft_drop_moves_down_and_scores() {
    let mut game = GameState::new(12345);
    game.apply_action(GameAction::Start);
    let y0 = game.active().unwrap().y;

    assert!(game.apply_action(GameAction::SoftDrop));
    assert_eq!(game.active().unwrap().y, y0 + 1);
    assert_eq!(game.score(), 1);
}

#[test]
fn four_rotations_restore_the_shape() {
    let mut game = GameState::new(12345);
    game.apply_action(GameAction::Start);
    let original = game.active().unwrap().shape;

    // The spawn position is wall-free, so every rotation commits.
    for _ in 0..4 {
        assert!(game.apply_action(GameAction::Rotate));
    }
    assert_eq!(game.active().unwrap().shape, original);
}

#[test]
fn commands_are_rejected_while_paused_or_idle() {
    let mut game = GameState::new(12345);

    // Idle: nothing but start/restart applies.
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert!(!game.apply_action(GameAction::Rotate));
    assert!(!game.apply_action(GameAction::TogglePause));

    game.apply_action(GameAction::Start);
    game.apply_action(GameAction::TogglePause);

    assert!(!game.apply_action(GameAction::MoveLeft));
    assert!(!game.apply_action(GameAction::SoftDrop));

    game.apply_action(GameAction::TogglePause);
    assert!(game.apply_action(GameAction::MoveLeft));
}

#[test]
fn automatic_fall_follows_the_interval() {
    let mut game = GameState::new(12345);
    game.apply_action(GameAction::Start);
    let y0 = game.active().unwrap().y;

    game.tick(game.fall_interval_ms() - 1);
    assert_eq!(game.active().unwrap().y, y0);

    game.tick(1);
    assert_eq!(game.active().unwrap().y, y0 + 1);
}

#[test]
fn paused_game_does_not_tick() {
    let mut game = GameState::new(12345);
    game.apply_action(GameAction::Start);
    game.apply_action(GameAction::TogglePause);
    let piece = game.active().unwrap();

    for _ in 0..100 {
        game.tick(1000);
    }
    assert_eq!(game.active().unwrap(), piece);
}

#[test]
fn deterministic_replay_from_the_same_seed() {
    let mut a = GameState::new(777);
    let mut b = GameState::new(777);
    a.apply_action(GameAction::Start);
    b.apply_action(GameAction::Start);

    for _ in 0..500 {
        a.tick(100);
        b.tick(100);
    }

    assert_eq!(a.score(), b.score());
    assert_eq!(a.grid().cells(), b.grid().cells());
    assert_eq!(a.active(), b.active());
}
