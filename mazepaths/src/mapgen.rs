//! Random maze generation.

use maze_core::{Coord, Grid, GridBuilder, GridError, Label};
use rand::Rng;

/// Generate a `rows` × `cols` maze where each cell is blocked with
/// probability `density` (clamped to `[0, 1]`, non-finite values count as
/// 0).
///
/// The origin is placed in the top-left corner and the destination in the
/// bottom-right one; both are always open. Shapes with fewer than two cells
/// fail with [`GridError::TooSmall`]. The destination is not guaranteed to
/// be reachable.
pub fn random_maze(
    rows: usize,
    cols: usize,
    density: f64,
    rng: &mut impl Rng,
) -> Result<Grid, GridError> {
    let p = if density.is_finite() {
        density.clamp(0.0, 1.0)
    } else {
        0.0
    };
    if rows.saturating_mul(cols) < 2 {
        return Err(GridError::TooSmall { rows, cols });
    }
    let mut b = GridBuilder::new(rows, cols)?;
    b.fill_fn(|_| {
        if rng.random_bool(p) {
            Label::Blocked
        } else {
            Label::Free
        }
    });
    let dims = b.dims();
    b.set(Coord::ZERO, Label::Origin);
    b.set(Coord::new(dims.rows - 1, dims.cols - 1), Label::Destination);
    Ok(b.build())
}
