//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Board positions use screen orientation: `x` is the column and grows
//! right, `y` is the row and grows down.

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X is the column, Y is the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a point from a `(row, column)` pair.
    #[inline]
    pub const fn at(row: i32, column: i32) -> Self {
        Self { x: column, y: row }
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// The single row `y` of the range, counted from `min.y`. Empty if the
    /// row falls outside.
    pub fn line(self, y: i32) -> Self {
        let row = self.min.y + y;
        if y < 0 || row >= self.max.y {
            return Self::default();
        }
        Self::new(self.min.x, row, self.max.x, row + 1)
    }

    /// The single column `x` of the range, counted from `min.x`. Empty if the
    /// column falls outside.
    pub fn column(self, x: i32) -> Self {
        let col = self.min.x + x;
        if x < 0 || col >= self.max.x {
            return Self::default();
        }
        Self::new(col, self.min.y, col + 1, self.max.y)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_is_row_column() {
        let p = Point::at(2, 1);
        assert_eq!(p, Point::new(1, 2));
        assert_eq!(p.y, 2);
        assert_eq!(p.x, 1);
    }

    #[test]
    fn range_canonicalizes_corners() {
        let r = Range::new(3, 3, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 3));
        assert_eq!(r.iter().count(), 9);
    }

    #[test]
    fn range_contains_is_half_open() {
        let r = Range::new(0, 0, 3, 3);
        assert!(r.contains(Point::new(2, 2)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, -1)));
    }

    #[test]
    fn range_line_and_column() {
        let r = Range::new(0, 0, 3, 3);
        let row: Vec<_> = r.line(1).iter().collect();
        assert_eq!(row, vec![Point::new(0, 1), Point::new(1, 1), Point::new(2, 1)]);
        let col: Vec<_> = r.column(2).iter().collect();
        assert_eq!(col, vec![Point::new(2, 0), Point::new(2, 1), Point::new(2, 2)]);
        assert!(r.line(3).is_empty());
        assert!(r.column(-1).is_empty());
    }

    #[test]
    fn range_iter_is_row_major() {
        let r = Range::new(0, 0, 2, 2);
        let mut it = r.iter();
        assert_eq!(it.next(), Some(Point::new(0, 0)));
        assert_eq!(it.next(), Some(Point::new(1, 0)));
        assert_eq!(it.next(), Some(Point::new(0, 1)));
        assert_eq!(it.next(), Some(Point::new(1, 1)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn empty_range_iterates_nothing() {
        let r = Range::new(0, 0, 0, 5);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
    }
}
