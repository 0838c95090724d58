//! Errors raised while building a [`Grid`](crate::Grid).

use std::fmt;

use crate::geom::Coord;

/// Errors that can occur when constructing a grid from labels or text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The number of cells does not equal `rows * cols`.
    ShapeMismatch { expected: usize, actual: usize },
    /// A label code outside `0..=3` was found at flat index `index`.
    InvalidLabel { index: usize, value: i32 },
    /// A dimension does not fit the coordinate type.
    TooLarge { rows: usize, cols: usize },
    /// The shape has no room for both an origin and a destination.
    TooSmall { rows: usize, cols: usize },
    /// A text line has a different width than the first one.
    InconsistentWidth {
        line: usize,
        expected: usize,
        actual: usize,
    },
    /// A text maze contains a character with no label meaning.
    InvalidGlyph { ch: char, at: Coord },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "grid: expected {expected} cells, got {actual}")
            }
            Self::InvalidLabel { index, value } => {
                write!(f, "grid: invalid label {value} at index {index}")
            }
            Self::TooLarge { rows, cols } => {
                write!(f, "grid: dimensions {rows}x{cols} are too large")
            }
            Self::TooSmall { rows, cols } => {
                write!(f, "grid: {rows}x{cols} cannot hold both an origin and a destination")
            }
            Self::InconsistentWidth {
                line,
                expected,
                actual,
            } => write!(
                f,
                "grid: line {line} has width {actual}, expected {expected}"
            ),
            Self::InvalidGlyph { ch, at } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {at}")
            }
        }
    }
}

impl std::error::Error for GridError {}
