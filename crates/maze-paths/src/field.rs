use std::fmt;

use maze_core::{Coord, Dims};

/// Hop count of a cell from the nearest source, or `Unreached`.
///
/// Blocked cells are never reached; callers that need to tell "blocked"
/// from "cut off" read the grid label.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    Reached(u32),
    #[default]
    Unreached,
}

impl Distance {
    /// Whether the cell was reached.
    #[inline]
    pub const fn is_reached(self) -> bool {
        matches!(self, Distance::Reached(_))
    }

    /// The hop count, if reached.
    #[inline]
    pub const fn value(self) -> Option<u32> {
        match self {
            Distance::Reached(d) => Some(d),
            Distance::Unreached => None,
        }
    }

    /// Hop count with `-1` standing for unreached.
    #[inline]
    pub fn to_signed(self) -> i64 {
        self.value().map_or(-1, i64::from)
    }
}

impl From<Option<u32>> for Distance {
    fn from(v: Option<u32>) -> Self {
        v.map_or(Distance::Unreached, Distance::Reached)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reached(d) => write!(f, "{d}"),
            Distance::Unreached => f.write_str("unreached"),
        }
    }
}

/// Per-cell hop counts over the shape of a grid.
///
/// Built by the breadth-first search in
/// [`from_origin`](DistanceField::from_origin) /
/// [`from_sources`](DistanceField::from_sources) and read-only afterwards.
/// A degenerate query (empty grid, no source inside the grid) produces an
/// empty field; check [`is_empty`](Self::is_empty) before indexing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistanceField {
    pub(crate) dims: Dims,
    pub(crate) cells: Vec<Distance>,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DistanceField {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            dims: Dims,
            cells: Vec<Distance>,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        let dims = maze_core::grid::shape_for(raw.dims, raw.cells.len())
            .map_err(serde::de::Error::custom)?;
        Ok(DistanceField {
            dims,
            cells: raw.cells,
        })
    }
}

impl DistanceField {
    /// The empty field returned for degenerate queries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shape of the field (zero for an empty field).
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Whether the field holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the field.
    #[inline]
    pub fn valid(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    /// Distance at `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c` is outside the field.
    #[inline]
    pub fn at(&self, c: Coord) -> Distance {
        match self.dims.index(c) {
            Some(i) => self.cells[i],
            None => panic!("coordinate {c} outside {} distance field", self.dims),
        }
    }

    /// Distance at `c`, or `None` if `c` is outside the field.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Distance> {
        self.dims.index(c).map(|i| self.cells[i])
    }

    /// Number of reached cells.
    pub fn reached_count(&self) -> usize {
        self.cells.iter().filter(|d| d.is_reached()).count()
    }

    /// Largest hop count in the field, or `None` if nothing was reached.
    pub fn max_distance(&self) -> Option<u32> {
        self.cells.iter().filter_map(|d| d.value()).max()
    }

    /// Row-major iterator over `(Coord, Distance)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Distance)> + '_ {
        self.dims.iter().zip(self.cells.iter().copied())
    }

    /// Row-major hop counts with `-1` for unreached cells.
    pub fn to_signed(&self) -> Vec<i64> {
        self.cells.iter().map(|d| d.to_signed()).collect()
    }

    /// Rows of hop counts with `-1` for unreached cells.
    pub fn to_signed_rows(&self) -> Vec<Vec<i64>> {
        let cols = self.dims.cols.max(1) as usize;
        self.to_signed().chunks(cols).map(<[i64]>::to_vec).collect()
    }
}
