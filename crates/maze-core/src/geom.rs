//! Geometry primitives: [`Coord`] and [`Dims`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downwards, columns grow to
//! the right, matching the way mazes are written out as text.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell coordinate on a grid.
///
/// Axes are signed so that neighbours of border cells can be expressed and
/// then rejected by a bounds check.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// The top-left cell (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell one row above.
    #[inline]
    pub const fn up(self) -> Self {
        Self::new(self.row - 1, self.col)
    }

    /// The cell one row below.
    #[inline]
    pub const fn down(self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    /// The cell one column to the left.
    #[inline]
    pub const fn left(self) -> Self {
        Self::new(self.row, self.col - 1)
    }

    /// The cell one column to the right.
    #[inline]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// The four axis-aligned neighbours, in the order up, down, left, right.
    ///
    /// Searches that branch on neighbours rely on this order being fixed so
    /// their output is reproducible.
    #[inline]
    pub const fn neighbors_4(self) -> [Coord; 4] {
        [self.up(), self.down(), self.left(), self.right()]
    }

    /// Whether `other` is exactly one axis-aligned step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// Manhattan (L1) distance between two coordinates.
    #[inline]
    pub fn manhattan(self, other: Coord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Shape of a grid: `rows` × `cols` cells, anchored at (0, 0).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

impl Dims {
    /// Create a new shape. Negative extents are clamped to zero.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: if rows < 0 { 0 } else { rows },
            cols: if cols < 0 { 0 } else { cols },
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the shape holds no cells at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `c` lies within `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if it is out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every coordinate of the shape.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            cur: Coord::ZERO,
        }
    }
}

impl IntoIterator for Dims {
    type Item = Coord;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// DimsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    cur: Coord,
}

impl Iterator for DimsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.dims.is_empty() || self.cur.row >= self.dims.rows {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.dims.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.dims.is_empty() || self.cur.row >= self.dims.rows {
            return (0, Some(0));
        }
        let cols = self.dims.cols as usize;
        let remaining_in_row = (self.dims.cols - self.cur.col) as usize;
        let remaining_rows = (self.dims.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * cols;
        (total, Some(total))
    }
}

impl ExactSizeIterator for DimsIter {}
