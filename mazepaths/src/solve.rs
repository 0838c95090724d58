//! One full query: locate the markers, label distances, enumerate paths.

use std::fmt;

use log::{info, warn};
use maze_core::{Coord, Grid, Label};
use maze_paths::{DistanceField, Path, PathEnumerator, count_shortest_paths};
use serde::Serialize;

/// Everything computed for one maze.
#[derive(Debug, Clone)]
pub struct Report {
    pub grid: Grid,
    pub origin: Coord,
    pub destination: Coord,
    pub field: DistanceField,
    pub paths: Vec<Path>,
    /// Number of shortest paths, including any the limit left out.
    pub total_paths: u128,
    pub truncated: bool,
}

impl Report {
    /// Hop count of the shortest path, or `None` if the destination is cut off.
    pub fn shortest_length(&self) -> Option<u32> {
        self.field.get(self.destination).and_then(|d| d.value())
    }

    /// Serializable digest of the report.
    pub fn summary(&self) -> Summary<'_> {
        Summary {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            origin: self.origin,
            destination: self.destination,
            shortest_length: self.shortest_length(),
            path_count: self.total_paths,
            truncated: self.truncated,
            paths: &self.paths,
        }
    }
}

/// JSON-friendly view of a [`Report`].
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub rows: i32,
    pub cols: i32,
    pub origin: Coord,
    pub destination: Coord,
    pub shortest_length: Option<u32>,
    pub path_count: u128,
    pub truncated: bool,
    pub paths: &'a [Path],
}

/// Solve `grid`, keeping at most `max_paths` paths if given.
///
/// The origin and destination are the first cells carrying the matching
/// marker. An unreachable destination is not an error: the report simply
/// has no paths.
pub fn solve(grid: Grid, max_paths: Option<usize>) -> Result<Report, SolveError> {
    let origin = grid
        .find(Label::Origin)
        .ok_or(SolveError::MissingMarker(Label::Origin))?;
    let destination = grid
        .find(Label::Destination)
        .ok_or(SolveError::MissingMarker(Label::Destination))?;
    for label in [Label::Origin, Label::Destination] {
        let n = grid.count(label);
        if n > 1 {
            warn!("{n} {label} markers, using the first one");
        }
    }

    let field = DistanceField::from_origin(&grid, origin);
    let total_paths = count_shortest_paths(&field, destination);

    let mut enumerator = PathEnumerator::new(&field);
    if let Some(n) = max_paths {
        enumerator = enumerator.with_limit(n);
    }
    let run = enumerator.run(destination);
    info!(
        "{origin} -> {destination}: {} of {total_paths} shortest paths kept",
        run.paths.len()
    );

    Ok(Report {
        origin,
        destination,
        paths: run.paths,
        truncated: run.truncated,
        total_paths,
        field,
        grid,
    })
}

/// Errors that prevent a maze from being solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The grid has no cell with this marker.
    MissingMarker(Label),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMarker(label) => write!(f, "maze has no {label} marker"),
        }
    }
}

impl std::error::Error for SolveError {}
