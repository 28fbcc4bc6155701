//! [`TicTacToe`]: the [`Model`] that turns clicks into moves.

use log::{info, warn};

use crate::app::{Effect, Model};
use crate::game::{GamePhase, GameState, Snapshot};
use crate::messages::Msg;

/// Two players sharing one pointer.
///
/// A press on a cell while the game is in progress plays there. A press
/// after the game has ended starts a new one; the press itself is not
/// played.
#[derive(Clone, Debug, Default)]
pub struct TicTacToe {
    game: GameState,
}

impl TicTacToe {
    pub fn new(size: usize) -> Self {
        Self {
            game: GameState::new(size),
        }
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    fn click(&mut self, row: i32, column: i32) {
        if !self.game.phase().is_in_progress() {
            self.game.reset();
            return;
        }
        // Negative cells only come from a misbehaving front end.
        let (Ok(row), Ok(column)) = (usize::try_from(row), usize::try_from(column)) else {
            warn!("ignoring click outside the board at ({row}, {column})");
            return;
        };
        let res = self.game.apply_move(row, column);
        if res.accepted && res.phase != GamePhase::InProgress {
            info!("{}", self.game.snapshot().status_line());
        }
    }
}

impl Model for TicTacToe {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => {
                info!("{0}x{0} board, X to move", self.game.board().size());
                None
            }
            Msg::Quit => {
                self.game.terminate();
                Some(Effect::End)
            }
            Msg::Mouse { action, pos, .. } if action.is_press() => {
                self.click(pos.y, pos.x);
                None
            }
            Msg::Mouse { .. } | Msg::Screen { .. } => None,
        }
    }

    fn view(&self) -> Snapshot {
        self.game.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, Mark};
    use crate::geom::Point;
    use crate::messages::MouseAction;

    fn clicks(model: &mut TicTacToe, cells: &[(i32, i32)]) {
        for &(r, c) in cells {
            assert_eq!(model.update(Msg::click(r, c)), None);
        }
    }

    #[test]
    fn click_plays_current_player() {
        let mut m = TicTacToe::new(3);
        clicks(&mut m, &[(0, 2)]);
        assert_eq!(m.game().board().get(Point::at(0, 2)), Some(Cell::X));
        assert_eq!(m.game().current_player(), Mark::O);
    }

    #[test]
    fn any_button_press_counts_but_motion_does_not() {
        let mut m = TicTacToe::new(3);
        m.update(Msg::mouse(MouseAction::Move, Point::at(0, 0)));
        m.update(Msg::mouse(MouseAction::Release, Point::at(0, 0)));
        assert_eq!(m.game(), &GameState::new(3));

        m.update(Msg::mouse(MouseAction::Secondary, Point::at(0, 0)));
        assert_eq!(m.game().board().get(Point::at(0, 0)), Some(Cell::X));
    }

    #[test]
    fn click_after_win_resets_without_playing() {
        let mut m = TicTacToe::new(3);
        clicks(&mut m, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert_eq!(m.game().phase(), GamePhase::XWon);

        clicks(&mut m, &[(2, 2)]);
        assert_eq!(m.game(), &GameState::new(3));

        clicks(&mut m, &[(2, 2)]);
        assert_eq!(m.game().board().get(Point::at(2, 2)), Some(Cell::X));
    }

    #[test]
    fn quit_terminates_and_ends() {
        let mut m = TicTacToe::new(3);
        assert_eq!(m.update(Msg::Init), None);
        assert_eq!(m.update(Msg::Quit), Some(Effect::End));
        assert_eq!(m.view().phase, GamePhase::Terminated);
    }

    #[test]
    fn negative_cell_is_ignored() {
        let mut m = TicTacToe::new(3);
        m.update(Msg::mouse(MouseAction::Main, Point::new(-1, 0)));
        assert_eq!(m.game(), &GameState::new(3));
    }
}
