//! **maze-core**: grid types for shortest-path mazes.
//!
//! This crate provides the foundational types used by the rest of the
//! workspace: coordinates and shapes, the closed set of cell labels, and an
//! immutable labelled grid that can be built from label codes, nested rows,
//! or text.

pub mod error;
pub mod geom;
pub mod grid;
pub mod label;
pub mod text;

pub use error::GridError;
pub use geom::{Coord, Dims};
pub use grid::{Grid, GridBuilder};
pub use label::Label;
