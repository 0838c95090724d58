//! Shortest-path search on mazes.
//!
//! Two algorithms work together:
//!
//! - **Breadth-first labelling** ([`DistanceField::from_origin`]) computes the
//!   minimum number of 4-connected moves from an origin to every reachable
//!   cell.
//! - **Backward enumeration** ([`PathEnumerator`]) walks from a destination
//!   back down the distance gradient and returns *every* shortest path,
//!   branching wherever several neighbours are one step closer.
//!
//! [`count_shortest_paths`] gives the number of such paths without building
//! them, which is useful for picking a [`PathEnumerator::with_limit`].
//!
//! Both algorithms operate through the [`Pather`] trait for neighbour
//! enumeration; [`maze_core::Grid`] implements it.

mod bfs;
mod enumerate;
mod field;
mod path;
mod traits;

pub use enumerate::{Enumeration, PathEnumerator, count_shortest_paths, shortest_paths};
pub use field::{Distance, DistanceField};
pub use path::{Path, PathError};
pub use traits::Pather;
