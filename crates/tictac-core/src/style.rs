//! Visual styling: [`Color`] and the per-phase [`Palette`].

use crate::cell::Mark;
use crate::game::GamePhase;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Colours used to draw the board.
///
/// The grid takes the colour of the current phase; each mark takes the
/// colour of its owner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub x_won: Color,
    pub o_won: Color,
    pub tie: Color,
    pub mark_x: Color,
    pub mark_o: Color,
}

impl Palette {
    /// Grid line colour for `phase`. `Terminated` shares the tie colour.
    pub const fn grid_color(&self, phase: GamePhase) -> Color {
        match phase {
            GamePhase::InProgress => self.grid,
            GamePhase::XWon => self.x_won,
            GamePhase::OWon => self.o_won,
            GamePhase::Tied | GamePhase::Terminated => self.tie,
        }
    }

    pub const fn mark_color(&self, mark: Mark) -> Color {
        match mark {
            Mark::X => self.mark_x,
            Mark::O => self.mark_o,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        let red = Color::from_rgb(255, 0, 0);
        let blue = Color::from_rgb(50, 100, 255);
        Self {
            background: Color::from_rgb(28, 28, 28),
            grid: Color::WHITE,
            x_won: red,
            o_won: blue,
            tie: Color::from_rgb(50, 50, 50),
            mark_x: red,
            mark_o: blue,
        }
    }
}
