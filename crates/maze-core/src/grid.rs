//! The [`Grid`] type: an immutable 2D array of [`Label`]s.
//!
//! Grids are built once, through [`Grid::from_labels`], [`Grid::from_rows`],
//! [`Grid::parse`](crate::text) or a [`GridBuilder`], and are read-only
//! afterwards. Searches borrow them for the duration of a query.

use crate::error::GridError;
use crate::geom::{Coord, Dims};
use crate::label::Label;

/// A rectangular maze of labelled cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    dims: Dims,
    cells: Vec<Label>,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            dims: Dims,
            cells: Vec<Label>,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        let dims = shape_for(raw.dims, raw.cells.len()).map_err(serde::de::Error::custom)?;
        Ok(Grid::from_parts(dims, raw.cells))
    }
}

impl Grid {
    /// Build a grid from a flat, row-major list of label codes.
    ///
    /// Fails with [`GridError::ShapeMismatch`] if `labels.len()` differs
    /// from `rows * cols`, and with [`GridError::InvalidLabel`] for codes
    /// outside the closed label set.
    pub fn from_labels(rows: usize, cols: usize, labels: Vec<i32>) -> Result<Self, GridError> {
        let dims = checked_dims(rows, cols)?;
        let expected = dims.len();
        if labels.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: labels.len(),
            });
        }
        let cells = labels
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Label::try_from(value).map_err(|_| GridError::InvalidLabel { index, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dims, cells })
    }

    /// Build a grid from nested rows of label codes.
    ///
    /// Every row must have the width of the first one.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut flat = Vec::with_capacity(height * width);
        for row in rows {
            if row.len() != width {
                return Err(GridError::ShapeMismatch {
                    expected: height * width,
                    actual: flat.len() + row.len(),
                });
            }
            flat.extend(row);
        }
        Self::from_labels(height, width, flat)
    }

    pub(crate) fn from_parts(dims: Dims, cells: Vec<Label>) -> Self {
        debug_assert_eq!(dims.len(), cells.len());
        Self { dims, cells }
    }

    /// Shape of the grid.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn valid(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    /// Label at `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c` is outside the grid. Use [`get`](Self::get) when the
    /// coordinate has not been checked with [`valid`](Self::valid).
    #[inline]
    pub fn label(&self, c: Coord) -> Label {
        match self.dims.index(c) {
            Some(i) => self.cells[i],
            None => panic!("coordinate {c} outside {} grid", self.dims),
        }
    }

    /// Label at `c`, or `None` if `c` is outside the grid.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Label> {
        self.dims.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is inside the grid and blocked.
    #[inline]
    pub fn is_blocked(&self, c: Coord) -> bool {
        self.get(c) == Some(Label::Blocked)
    }

    /// Whether `c` is inside the grid and can be entered.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.get(c).is_some_and(Label::is_passable)
    }

    /// First coordinate holding `label`, in row-major order.
    pub fn find(&self, label: Label) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&l| l == label)
            .map(|i| self.dims.coord(i))
    }

    /// Count how many cells hold `label`.
    pub fn count(&self, label: Label) -> usize {
        self.cells.iter().filter(|&&l| l == label).count()
    }

    /// Row-major iterator over `(Coord, Label)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.dims.iter(),
        }
    }

    /// Row-major label codes, the inverse of [`from_labels`](Self::from_labels).
    pub fn to_codes(&self) -> Vec<i32> {
        self.cells.iter().map(|l| l.code()).collect()
    }
}

/// Check that `dims` is a valid shape holding exactly `cells` cells.
///
/// Negative extents count as zero, like [`Dims::new`].
pub fn shape_for(dims: Dims, cells: usize) -> Result<Dims, GridError> {
    let dims = Dims::new(dims.rows, dims.cols);
    let dims = checked_dims(dims.rows as usize, dims.cols as usize)?;
    if dims.len() != cells {
        return Err(GridError::ShapeMismatch {
            expected: dims.len(),
            actual: cells,
        });
    }
    Ok(dims)
}

fn checked_dims(rows: usize, cols: usize) -> Result<Dims, GridError> {
    let (Ok(r), Ok(c)) = (i32::try_from(rows), i32::try_from(cols)) else {
        return Err(GridError::TooLarge { rows, cols });
    };
    if rows.checked_mul(cols).is_none() {
        return Err(GridError::TooLarge { rows, cols });
    }
    Ok(Dims::new(r, c))
}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Coord, Label);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Coord, Label)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: crate::geom::DimsIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Coord, Label);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.inner.next()?;
        Some((c, self.grid.label(c)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GridIter<'_> {}

// ---------------------------------------------------------------------------
// GridBuilder
// ---------------------------------------------------------------------------

/// Mutable staging area for a [`Grid`].
///
/// All cells start [`Label::Free`]. Writes outside the shape are ignored.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    dims: Dims,
    cells: Vec<Label>,
}

impl GridBuilder {
    /// Create a builder for a `rows` × `cols` grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let dims = checked_dims(rows, cols)?;
        Ok(Self {
            dims,
            cells: vec![Label::Free; dims.len()],
        })
    }

    /// Shape of the grid being built.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Set the label at `c`. No-op if `c` is outside the shape.
    pub fn set(&mut self, c: Coord, label: Label) -> &mut Self {
        if let Some(i) = self.dims.index(c) {
            self.cells[i] = label;
        }
        self
    }

    /// Label currently staged at `c`.
    pub fn get(&self, c: Coord) -> Option<Label> {
        self.dims.index(c).map(|i| self.cells[i])
    }

    /// Fill the staged cells using a function of each coordinate.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Coord) -> Label) -> &mut Self {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(self.dims.coord(i));
        }
        self
    }

    /// Freeze the staged cells into an immutable grid.
    pub fn build(self) -> Grid {
        Grid::from_parts(self.dims, self.cells)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_labels(2, 2, vec![2, 1, 0, 3]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn rejects_inconsistent_shape() {
        let json = r#"{"dims":{"rows":2,"cols":2},"cells":["Free","Origin"]}"#;
        let err = serde_json::from_str::<Grid>(json).unwrap_err();
        assert!(err.to_string().contains("expected 4 cells, got 2"));

        let json = r#"{"dims":{"rows":-1,"cols":3},"cells":["Free"]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());

        let json = r#"{"dims":{"rows":1,"cols":2},"cells":["Origin","Destination"]}"#;
        let g: Grid = serde_json::from_str(json).unwrap();
        assert_eq!(g.label(Coord::new(0, 1)), Label::Destination);
    }
}
