//! Input events: [`Msg`] and [`MouseAction`].

use crate::geom::Point;

// ---------------------------------------------------------------------------
// MouseAction
// ---------------------------------------------------------------------------

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Middle button pressed.
    Auxiliary,
    /// Secondary (right) button pressed.
    Secondary,
    /// Button released.
    Release,
    /// Mouse moved (no button state change).
    Move,
}

impl MouseAction {
    /// Whether this is a button press of any kind.
    #[inline]
    pub const fn is_press(self) -> bool {
        matches!(self, Self::Main | Self::Auxiliary | Self::Secondary)
    }
}

// ---------------------------------------------------------------------------
// Msg
// ---------------------------------------------------------------------------

/// An input message delivered to the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// A mouse event. `pos` is a board cell (x = column, y = row), already
    /// mapped from pixels and clamped by the front end.
    Mouse {
        action: MouseAction,
        pos: Point,
    },
    /// The window was resized (in pixels).
    Screen {
        width: i32,
        height: i32,
    },
    /// Sent once when the application starts.
    Init,
    /// Request to quit.
    Quit,
}

impl Msg {
    #[inline]
    pub fn mouse(action: MouseAction, pos: Point) -> Self {
        Self::Mouse { action, pos }
    }

    /// Convenience: a primary click on cell (`row`, `column`).
    pub fn click(row: i32, column: i32) -> Self {
        Self::mouse(MouseAction::Main, Point::at(row, column))
    }
}
