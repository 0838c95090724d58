//! The [`Path`] type and its consistency check.

use std::fmt;

use maze_core::{Coord, Grid};

use crate::field::{Distance, DistanceField};

/// An origin → destination sequence of 4-connected cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<Coord>,
}

impl Path {
    /// All nodes, origin first.
    #[inline]
    pub fn nodes(&self) -> &[Coord] {
        &self.nodes
    }

    /// First node, or `None` for an empty path.
    #[inline]
    pub fn origin(&self) -> Option<Coord> {
        self.nodes.first().copied()
    }

    /// Last node, or `None` for an empty path.
    #[inline]
    pub fn destination(&self) -> Option<Coord> {
        self.nodes.last().copied()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.nodes.iter()
    }

    /// Whether the path visits `c`.
    pub fn contains(&self, c: Coord) -> bool {
        self.nodes.contains(&c)
    }

    /// Check that this is a shortest path for `field` on `grid`.
    ///
    /// Every node must be an unblocked cell of `grid`, consecutive nodes must
    /// be 4-connected, and node `i` must sit at distance exactly `i`.
    pub fn verify(&self, grid: &Grid, field: &DistanceField) -> Result<(), PathError> {
        if self.nodes.is_empty() {
            return Err(PathError::Empty);
        }
        for (i, &c) in self.nodes.iter().enumerate() {
            if !grid.valid(c) || !field.valid(c) {
                return Err(PathError::OutOfBounds { at: c });
            }
            if grid.is_blocked(c) {
                return Err(PathError::Blocked { at: c });
            }
            let expected = i as u32;
            let actual = field.at(c);
            if actual != Distance::Reached(expected) {
                return Err(PathError::WrongDistance {
                    at: c,
                    expected,
                    actual,
                });
            }
        }
        for w in self.nodes.windows(2) {
            if !w[0].is_adjacent(w[1]) {
                return Err(PathError::NotAdjacent {
                    from: w[0],
                    to: w[1],
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<Coord>> for Path {
    fn from(nodes: Vec<Coord>) -> Self {
        Self { nodes }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Reasons a [`Path`] fails [`Path::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path has no nodes.
    Empty,
    /// A node lies outside the grid or the field.
    OutOfBounds { at: Coord },
    /// A node is a blocked cell.
    Blocked { at: Coord },
    /// A node is not at the distance its position in the path requires.
    WrongDistance {
        at: Coord,
        expected: u32,
        actual: Distance,
    },
    /// Two consecutive nodes are not one axis-aligned step apart.
    NotAdjacent { from: Coord, to: Coord },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path: no nodes"),
            Self::OutOfBounds { at } => write!(f, "path: node {at} is out of bounds"),
            Self::Blocked { at } => write!(f, "path: node {at} is blocked"),
            Self::WrongDistance {
                at,
                expected,
                actual,
            } => write!(
                f,
                "path: node {at} should be at distance {expected}, field has {actual}"
            ),
            Self::NotAdjacent { from, to } => {
                write!(f, "path: {from} and {to} are not adjacent")
            }
        }
    }
}

impl std::error::Error for PathError {}
