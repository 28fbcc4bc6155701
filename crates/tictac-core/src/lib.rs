//! **tictac-core**: two-player tic-tac-toe on an N×N board.
//!
//! This crate holds everything that is not windowing: geometry, the board,
//! the game state machine with win/tie detection, input messages, the
//! colour palette, and the single-threaded model/runner loop that a
//! graphical back-end drives.

pub mod app;
pub mod board;
pub mod cell;
pub mod game;
pub mod geom;
pub mod messages;
pub mod model;
pub mod style;

pub use app::{AppRunner, Effect, EventLoopDriver, Model};
pub use board::{Board, Line};
pub use cell::{Cell, Mark};
pub use game::{GamePhase, GameState, MoveResult, Snapshot};
pub use geom::{Point, Range};
pub use messages::*;
pub use model::TicTacToe;
pub use style::{Color, Palette};

/// Board side used when none is given.
pub const DEFAULT_SIZE: usize = 3;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn snapshot_round_trip() {
        let mut game = GameState::new(3);
        game.apply_move(0, 0);
        game.apply_move(2, 1);
        let snap = game.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }

    #[test]
    fn palette_round_trip() {
        let palette = Palette::default();
        let json = serde_json::to_string(&palette).unwrap();
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(palette, back);
    }
}
