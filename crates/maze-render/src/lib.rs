//! Text diagrams for mazes.
//!
//! [`render_grid`], [`render_distances`] and [`render_path`] draw a grid, its
//! distance field, or one shortest path into a [`Canvas`]. Canvases print as
//! plain text and keep a [`Mark`] per glyph for coloured front ends. Nothing
//! here feeds back into the search.

pub mod canvas;
pub mod diagram;

pub use canvas::{Canvas, Glyph, Mark};
pub use diagram::{CELL_WIDTH, render_distances, render_grid, render_path};
