//! The [`Board`] type: an N×N grid of [`Cell`]s, fixed after construction.
//!
//! Storage is a single row-major buffer. Index arithmetic lives in one private
//! helper; everything else addresses cells by [`Point`].

use std::fmt;

use crate::cell::{Cell, Mark};
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------

/// One of the 2N + 2 straight lines that can win a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    Row(i32),
    Column(i32),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// The cells on this line for a board of side `size`.
    pub fn points(self, size: i32) -> Vec<Point> {
        let bounds = Range::new(0, 0, size, size);
        match self {
            Self::Row(r) => bounds.line(r).iter().collect(),
            Self::Column(c) => bounds.column(c).iter().collect(),
            Self::Diagonal => (0..size).map(|i| Point::at(i, i)).collect(),
            Self::AntiDiagonal => (0..size).map(|i| Point::at(i, size - 1 - i)).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A square board of side N, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: Vec<Cell>,
    size: usize,
}

impl Board {
    /// Create an empty board of side `size`. A side of 0 is clamped to 1.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            cells: vec![Cell::Empty; size * size],
            size,
        }
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The board's extent as a range starting at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        let n = self.size as i32;
        Range::new(0, 0, n, n)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * self.size + (p.x as usize))
        } else {
            None
        }
    }

    /// Read the cell at `p`, or `None` if `p` is off the board.
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) if `p` is off
    /// the board.
    pub fn set(&mut self, p: Point, cell: Cell) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every row, then every column, then both diagonals.
    pub fn lines(&self) -> impl Iterator<Item = Line> {
        let n = self.size as i32;
        (0..n)
            .map(Line::Row)
            .chain((0..n).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Whether every cell on `line` holds `mark`.
    pub fn owned_by(&self, line: Line, mark: Mark) -> bool {
        let target = Cell::from(mark);
        line.points(self.size as i32)
            .into_iter()
            .all(|p| self.get(p) == Some(target))
    }

    /// The first line entirely owned by `mark`, if any.
    pub fn winning_line(&self, mark: Mark) -> Option<Line> {
        self.lines().find(|&line| self.owned_by(line, mark))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    /// One text line per row, e.g. `XO.` for a 3×3 board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
