//! The game state machine: [`GameState`], [`GamePhase`], [`MoveResult`] and
//! the render-ready [`Snapshot`].
//!
//! ```text
//! InProgress --move--> InProgress (player flips)
//! InProgress --move--> XWon | OWon | Tied
//! any        --reset-> InProgress
//! any        --quit--> Terminated
//! ```
//!
//! Moves are only accepted in `InProgress` and only on empty cells. A
//! rejected move is a no-op, not an error.

use std::fmt;

use log::{debug, info, warn};

use crate::board::Board;
use crate::cell::{Cell, Mark};
use crate::geom::Point;

// ---------------------------------------------------------------------------
// GamePhase
// ---------------------------------------------------------------------------

/// Exactly one phase holds at any time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    #[default]
    InProgress,
    XWon,
    OWon,
    Tied,
    /// The user asked to quit. Set by the front end, not by play.
    Terminated,
}

impl GamePhase {
    /// The winning phase for `mark`.
    #[inline]
    pub const fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => Self::XWon,
            Mark::O => Self::OWon,
        }
    }

    #[inline]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// The winner, if the game ended with one.
    #[inline]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            Self::XWon => Some(Mark::X),
            Self::OWon => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::XWon => "X won",
            Self::OWon => "O won",
            Self::Tied => "tied",
            Self::Terminated => "terminated",
        })
    }
}

// ---------------------------------------------------------------------------
// MoveResult
// ---------------------------------------------------------------------------

/// Outcome of [`GameState::apply_move`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// Whether the board changed.
    pub accepted: bool,
    /// The phase after the call.
    pub phase: GamePhase,
}

impl MoveResult {
    #[inline]
    const fn accepted(phase: GamePhase) -> Self {
        Self {
            accepted: true,
            phase,
        }
    }

    #[inline]
    const fn rejected(phase: GamePhase) -> Self {
        Self {
            accepted: false,
            phase,
        }
    }
}

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

/// Board, player to move and phase.
///
/// Mutated only through [`apply_move`](Self::apply_move),
/// [`reset`](Self::reset) and [`terminate`](Self::terminate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Mark,
    phase: GamePhase,
}

impl GameState {
    /// A fresh game on an empty board of side `size`, X to move.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current: Mark::X,
            phase: GamePhase::InProgress,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose mark the next accepted move places. Meaningless once
    /// the game has ended, until [`reset`](Self::reset).
    #[inline]
    pub fn current_player(&self) -> Mark {
        self.current
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Place the current player's mark at (`row`, `column`).
    ///
    /// Rejected without any change if the game is not in progress, the cell
    /// is occupied, or the coordinates are off the board. Otherwise the
    /// terminal condition is evaluated and, if the game goes on, the turn
    /// passes to the other player.
    pub fn apply_move(&mut self, row: usize, column: usize) -> MoveResult {
        if !self.phase.is_in_progress() {
            debug!("move ({row}, {column}) rejected: game is {}", self.phase);
            return MoveResult::rejected(self.phase);
        }

        let (Ok(r), Ok(c)) = (i32::try_from(row), i32::try_from(column)) else {
            warn!("move ({row}, {column}) rejected: off the board");
            return MoveResult::rejected(self.phase);
        };
        let p = Point::at(r, c);
        match self.board.get(p) {
            None => {
                warn!("move ({row}, {column}) rejected: off the board");
                return MoveResult::rejected(self.phase);
            }
            Some(Cell::Empty) => {}
            Some(occupant) => {
                debug!("move ({row}, {column}) rejected: occupied by {occupant:?}");
                return MoveResult::rejected(self.phase);
            }
        }

        self.board.set(p, Cell::from(self.current));
        debug!("{} plays ({row}, {column})", self.current);

        self.phase = self.evaluate_terminal();
        if self.phase.is_in_progress() {
            self.current = self.current.opponent();
        } else {
            info!("game over: {}\n{}", self.phase, self.board);
        }
        MoveResult::accepted(self.phase)
    }

    /// The phase implied by the current board.
    ///
    /// X is checked before O, then fullness. Under alternating play both
    /// players can never own a line at once, so checking only the player who
    /// just moved would give the same answer. Pure and idempotent.
    pub fn evaluate_terminal(&self) -> GamePhase {
        if self.phase == GamePhase::Terminated {
            return GamePhase::Terminated;
        }
        match [Mark::X, Mark::O].into_iter().find(|&m| self.has_won(m)) {
            Some(mark) => GamePhase::won_by(mark),
            None if self.board.is_full() => GamePhase::Tied,
            None => GamePhase::InProgress,
        }
    }

    /// Whether `mark` owns a full row, column or diagonal.
    pub fn has_won(&self, mark: Mark) -> bool {
        self.board.winning_line(mark).is_some()
    }

    /// Empty board, X to move, in progress. Valid from any phase.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Mark::X;
        self.phase = GamePhase::InProgress;
        info!("new game");
    }

    /// Record a quit request. Further moves are rejected until reset.
    pub fn terminate(&mut self) {
        self.phase = GamePhase::Terminated;
        info!("game terminated");
    }

    /// An owned copy for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.board.size(),
            cells: self.board.cells().to_vec(),
            current: self.current,
            phase: self.phase,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SIZE)
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Read-only view of a [`GameState`] handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Board side N.
    pub size: usize,
    /// N×N cells, row-major.
    pub cells: Vec<Cell>,
    pub current: Mark,
    pub phase: GamePhase,
}

impl Snapshot {
    /// Row-major iterator over `(row, column, cell)` for non-empty cells.
    pub fn marks(&self) -> impl Iterator<Item = (usize, usize, Mark)> + '_ {
        let n = self.size.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.mark().map(|m| (i / n, i % n, m)))
    }

    /// Short human-readable status, e.g. for a window title.
    pub fn status_line(&self) -> String {
        if let Some(mark) = self.phase.winner() {
            return format!("{mark} wins - click to play again");
        }
        match self.phase {
            GamePhase::Tied => "Tie - click to play again".into(),
            GamePhase::Terminated => "Bye".into(),
            _ => format!("{} to move", self.current),
        }
    }
}
