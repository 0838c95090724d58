//! All-shortest-paths enumeration over a [`DistanceField`].
//!
//! The search starts at the destination and walks *backwards* into cells
//! whose distance is exactly one less, until it reaches a cell at distance 0.
//! Whenever several such cells exist the walk branches: the current path
//! continues into the first one and a copy of it is queued for each of the
//! others. Partial paths live on an explicit work stack, so deep mazes do not
//! grow the call stack.

use log::{debug, trace, warn};
use maze_core::Coord;

use crate::field::{Distance, DistanceField};
use crate::path::Path;

/// Result of a [`PathEnumerator`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    /// Shortest paths found, each ordered origin → destination.
    pub paths: Vec<Path>,
    /// Whether the path limit stopped the search before it finished.
    pub truncated: bool,
}

/// Enumerates every shortest path to a destination in a [`DistanceField`].
#[derive(Debug, Clone, Copy)]
pub struct PathEnumerator<'a> {
    field: &'a DistanceField,
    limit: Option<usize>,
}

impl<'a> PathEnumerator<'a> {
    /// Create an enumerator over `field` with no path limit.
    pub fn new(field: &'a DistanceField) -> Self {
        Self { field, limit: None }
    }

    /// Stop after `limit` complete paths.
    ///
    /// Symmetric open areas have exponentially many shortest paths; callers
    /// enumerating untrusted mazes should set a limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Enumerate the shortest paths ending at `dest`.
    ///
    /// An empty field, an out-of-bounds destination or an unreached
    /// destination yields an empty result. Output order is deterministic:
    /// predecessors are taken in the order up, down, left, right.
    ///
    /// # Panics
    ///
    /// Panics if a reached cell at a nonzero distance has no neighbour one
    /// step closer, which cannot happen for a field built by breadth-first
    /// search.
    pub fn run(&self, dest: Coord) -> Enumeration {
        let mut out = Enumeration::default();
        let Some(Distance::Reached(total)) = self.field.get(dest) else {
            debug!("enumerate: destination {dest} not reached, no paths");
            return out;
        };

        let mut stack: Vec<(Vec<Coord>, Coord)> = vec![(vec![dest], dest)];
        let mut preds = Vec::with_capacity(4);

        while let Some((mut path, mut tail)) = stack.pop() {
            if self.limit.is_some_and(|n| out.paths.len() >= n) {
                out.truncated = true;
                break;
            }

            loop {
                let d = match self.field.at(tail) {
                    Distance::Reached(0) => break,
                    Distance::Reached(d) => d,
                    // Predecessors are filtered on a reached distance.
                    Distance::Unreached => {
                        unreachable!("enumerate: walked into unreached cell {tail}")
                    }
                };
                self.predecessors(tail, d, &mut preds);
                let Some((&next, rest)) = preds.split_first() else {
                    panic!("enumerate: cell {tail} at distance {d} has no predecessor");
                };
                for &alt in rest {
                    trace!("enumerate: branch at {tail} into {alt}");
                    let mut branch = path.clone();
                    branch.push(alt);
                    stack.push((branch, alt));
                }
                path.push(next);
                tail = next;
            }

            path.reverse();
            out.paths.push(Path::from(path));
        }

        if out.truncated {
            warn!(
                "enumerate: stopped after {} paths to {dest}, more exist",
                out.paths.len()
            );
        }
        debug!(
            "enumerate: {} shortest paths of length {total} to {dest}",
            out.paths.len()
        );
        out
    }

    /// In-bounds neighbours of `c` sitting at distance `d - 1`.
    fn predecessors(&self, c: Coord, d: u32, buf: &mut Vec<Coord>) {
        buf.clear();
        let want = Distance::Reached(d - 1);
        buf.extend(
            c.neighbors_4()
                .into_iter()
                .filter(|&n| self.field.get(n) == Some(want)),
        );
    }
}

/// Every shortest path ending at `dest`, with no limit.
///
/// Shorthand for `PathEnumerator::new(field).run(dest).paths`.
pub fn shortest_paths(field: &DistanceField, dest: Coord) -> Vec<Path> {
    PathEnumerator::new(field).run(dest).paths
}

/// Number of shortest paths ending at `dest`, without enumerating them.
///
/// Counts are accumulated in increasing distance order: a source counts 1,
/// every other reached cell sums the counts of its predecessors. The result
/// saturates at `u128::MAX`. Unreached or out-of-bounds destinations count 0.
pub fn count_shortest_paths(field: &DistanceField, dest: Coord) -> u128 {
    let Some(Distance::Reached(_)) = field.get(dest) else {
        return 0;
    };
    let dims = field.dims();

    let mut order: Vec<(u32, usize)> = field
        .cells
        .iter()
        .enumerate()
        .filter_map(|(i, d)| d.value().map(|v| (v, i)))
        .collect();
    order.sort_unstable();

    let mut counts = vec![0u128; dims.len()];
    for (d, i) in order {
        if d == 0 {
            counts[i] = 1;
            continue;
        }
        let want = Distance::Reached(d - 1);
        let c = dims.coord(i);
        counts[i] = c
            .neighbors_4()
            .into_iter()
            .filter(|&n| field.get(n) == Some(want))
            .filter_map(|n| dims.index(n))
            .fold(0u128, |acc, ni| acc.saturating_add(counts[ni]));
    }

    dims.index(dest).map_or(0, |i| counts[i])
}
