//! Pixel geometry of the board inside the window.

use tictac_core::Point;

/// Splits a `width` × `height` pixel area into an N×N grid of equal cells.
///
/// Cell sides use integer division, so a few pixels may be left over on the
/// right and bottom edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Layout {
    width: u32,
    height: u32,
    size: u32,
}

impl Layout {
    pub fn new(width: u32, height: u32, size: usize) -> Self {
        Self {
            width,
            height,
            size: u32::try_from(size).unwrap_or(u32::MAX).max(1),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn cell_width(&self) -> u32 {
        self.width / self.size
    }

    #[inline]
    pub fn cell_height(&self) -> u32 {
        self.height / self.size
    }

    /// The cell under pixel (`px`, `py`), clamped to the board. Pixels in the
    /// leftover margin and outside the window map to the nearest edge cell.
    pub fn cell_at(&self, px: f64, py: f64) -> Point {
        let last = self.size as i32 - 1;
        let axis = |p: f64, cell: u32| -> i32 {
            if p <= 0.0 || cell == 0 {
                return 0;
            }
            ((p as u64) / u64::from(cell)).min(last as u64) as i32
        };
        Point::new(axis(px, self.cell_width()), axis(py, self.cell_height()))
    }

    /// Pixel centre of cell (`row`, `column`).
    pub fn cell_center(&self, row: usize, column: usize) -> (f32, f32) {
        let cw = self.cell_width() as f32;
        let ch = self.cell_height() as f32;
        (cw * 0.5 + column as f32 * cw, ch * 0.5 + row as f32 * ch)
    }

    /// Half the side of the square a mark is drawn in: a quarter of the
    /// smaller cell side.
    pub fn glyph_radius(&self) -> f32 {
        self.cell_width().min(self.cell_height()) as f32 * 0.25
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_sizes_use_integer_division() {
        let l = Layout::new(800, 600, 3);
        assert_eq!(l.cell_width(), 266);
        assert_eq!(l.cell_height(), 200);
        assert_eq!(l.glyph_radius(), 50.0);
    }

    #[test]
    fn pixel_to_cell() {
        let l = Layout::new(800, 600, 3);
        assert_eq!(l.cell_at(0.0, 0.0), Point::at(0, 0));
        assert_eq!(l.cell_at(265.9, 199.0), Point::at(0, 0));
        assert_eq!(l.cell_at(266.0, 200.0), Point::at(1, 1));
        assert_eq!(l.cell_at(700.0, 450.0), Point::at(2, 2));
        assert_eq!(l.cell_at(10.0, 599.0), Point::at(2, 0));
    }

    #[test]
    fn pixels_outside_the_grid_are_clamped() {
        let l = Layout::new(800, 600, 3);
        // Leftover margin: 3 * 266 = 798.
        assert_eq!(l.cell_at(799.0, 0.0), Point::at(0, 2));
        assert_eq!(l.cell_at(5000.0, 5000.0), Point::at(2, 2));
        assert_eq!(l.cell_at(-3.0, -7.0), Point::at(0, 0));
    }

    #[test]
    fn degenerate_window_maps_to_origin() {
        let l = Layout::new(2, 2, 3);
        assert_eq!(l.cell_width(), 0);
        assert_eq!(l.cell_at(1.0, 1.0), Point::new(0, 0));
    }

    #[test]
    fn centers() {
        let l = Layout::new(300, 300, 3);
        assert_eq!(l.cell_center(0, 0), (50.0, 50.0));
        assert_eq!(l.cell_center(2, 1), (150.0, 250.0));
    }

    #[test]
    fn zero_size_is_clamped() {
        let l = Layout::new(100, 100, 0);
        assert_eq!(l.size(), 1);
        assert_eq!(l.cell_width(), 100);
    }
}
