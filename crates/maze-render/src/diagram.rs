//! Boxed cell diagrams.
//!
//! Every grid row becomes a frame line followed by a content line, and a
//! final frame line closes the box:
//!
//! ```text
//! |-----|-----|
//! |  S  |     |
//! |-----|-----|
//! |  X  |  E  |
//! |-----|-----|
//! ```
//!
//! Each cell is six characters wide including its left border; its content
//! is centred three characters in.

use maze_core::{Coord, Grid, Label};
use maze_paths::{Distance, DistanceField, Path};

use crate::canvas::{Canvas, Mark};

/// Width of one cell including its left border.
pub const CELL_WIDTH: usize = 6;
/// Offset of the cell centre from its left border.
const CENTER: usize = 3;

/// Canvas position of the centre of cell `c`.
#[inline]
fn center(c: Coord) -> (usize, usize) {
    (2 * c.row as usize + 1, CELL_WIDTH * c.col as usize + CENTER)
}

/// Empty box with borders for every cell of `grid`.
fn frame(grid: &Grid) -> Canvas {
    let rows = grid.rows().max(0) as usize;
    let cols = grid.cols().max(0) as usize;
    let mut canvas = Canvas::new(CELL_WIDTH * cols + 1, 2 * rows + 1);
    for line in 0..canvas.height() {
        for x in 0..canvas.width() {
            if x % CELL_WIDTH == 0 {
                canvas.put(line, x, '|', Mark::Frame);
            } else if line % 2 == 0 {
                canvas.put(line, x, '-', Mark::Frame);
            }
        }
    }
    canvas
}

/// Diagram of the grid labels: `X` blocked, `S` origin, `E` destination.
pub fn render_grid(grid: &Grid) -> Canvas {
    let mut canvas = frame(grid);
    for (c, label) in grid.iter() {
        let mark = match label {
            Label::Free => continue,
            Label::Blocked => Mark::Blocked,
            Label::Origin | Label::Destination => Mark::Label,
        };
        let (line, x) = center(c);
        canvas.put(line, x, label.glyph(), mark);
    }
    canvas
}

/// Diagram of hop counts: `X` for blocked cells, otherwise the distance
/// right-aligned in three columns, `-1` where the cell was not reached.
///
/// An empty `field` shows every open cell as unreached.
pub fn render_distances(grid: &Grid, field: &DistanceField) -> Canvas {
    let mut canvas = frame(grid);
    for (c, label) in grid.iter() {
        let (line, x) = center(c);
        if label == Label::Blocked {
            canvas.put(line, x, 'X', Mark::Blocked);
            continue;
        }
        let d = field.get(c).unwrap_or(Distance::Unreached);
        canvas.put_str(line, x + 1 - CENTER, &distance_text(d), Mark::Distance);
    }
    canvas
}

/// Up to five characters, starting right after the cell's left border.
fn distance_text(d: Distance) -> String {
    let s = d.to_signed().to_string();
    match s.len() {
        0..=3 => format!("{s:>3}"),
        4..=5 => s,
        _ => "*****".to_string(),
    }
}

/// The grid diagram with `path` drawn over it: `o` on every node, `|`
/// between vertically adjacent nodes and `-` between horizontally adjacent
/// ones.
pub fn render_path(grid: &Grid, path: &Path) -> Canvas {
    let mut canvas = render_grid(grid);
    for &c in path {
        if grid.valid(c) {
            let (line, x) = center(c);
            canvas.put(line, x, 'o', Mark::Node);
        }
    }
    for w in path.nodes().windows(2) {
        if grid.valid(w[0]) && grid.valid(w[1]) {
            connect(&mut canvas, w[0], w[1]);
        }
    }
    canvas
}

/// Draw a straight connector between the centres of `a` and `b`.
/// Diagonal pairs are left unconnected.
fn connect(canvas: &mut Canvas, a: Coord, b: Coord) {
    let (la, xa) = center(a);
    let (lb, xb) = center(b);
    if xa == xb {
        for line in la.min(lb) + 1..la.max(lb) {
            canvas.put(line, xa, '|', Mark::Edge);
        }
    } else if la == lb {
        for x in xa.min(xb) + 1..xa.max(xb) {
            canvas.put(la, x, '-', Mark::Edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_paths::shortest_paths;

    fn lines(canvas: &Canvas) -> Vec<String> {
        canvas.to_string().lines().map(str::to_string).collect()
    }

    #[test]
    fn grid_diagram() {
        let grid = Grid::parse("S.\nXE").unwrap();
        assert_eq!(
            lines(&render_grid(&grid)),
            vec![
                "|-----|-----|",
                "|  S  |     |",
                "|-----|-----|",
                "|  X  |  E  |",
                "|-----|-----|",
            ]
        );
    }

    #[test]
    fn distance_diagram() {
        let grid = Grid::parse("S.X.\n....").unwrap();
        let field = DistanceField::from_origin(&grid, Coord::ZERO);
        assert_eq!(
            lines(&render_distances(&grid, &field)),
            vec![
                "|-----|-----|-----|-----|",
                "|  0  |  1  |  X  |  5  |",
                "|-----|-----|-----|-----|",
                "|  1  |  2  |  3  |  4  |",
                "|-----|-----|-----|-----|",
            ]
        );
    }

    #[test]
    fn unreached_cells_show_minus_one() {
        let grid = Grid::parse("SX.").unwrap();
        let field = DistanceField::from_origin(&grid, Coord::ZERO);
        assert_eq!(
            lines(&render_distances(&grid, &field))[1],
            "|  0  |  X  | -1  |"
        );
    }

    #[test]
    fn wide_distances() {
        assert_eq!(distance_text(Distance::Reached(7)), "  7");
        assert_eq!(distance_text(Distance::Reached(1234)), "1234");
        assert_eq!(distance_text(Distance::Reached(1_234_567)), "*****");
        assert_eq!(distance_text(Distance::Unreached), " -1");
    }

    #[test]
    fn path_diagram() {
        let grid = Grid::parse("S.\nXE").unwrap();
        let field = DistanceField::from_origin(&grid, Coord::ZERO);
        let paths = shortest_paths(&field, Coord::new(1, 1));
        assert_eq!(paths.len(), 1);
        let canvas = render_path(&grid, &paths[0]);
        assert_eq!(
            lines(&canvas),
            vec![
                "|-----|-----|",
                "|  o-----o  |",
                "|-----|--|--|",
                "|  X  |  o  |",
                "|-----|-----|",
            ]
        );
        assert_eq!(canvas.count(Mark::Node), 3);
        assert_eq!(canvas.count(Mark::Edge), 6);
    }

    #[test]
    fn empty_grid_is_a_single_border() {
        let grid = Grid::from_labels(0, 0, Vec::new()).unwrap();
        assert_eq!(render_grid(&grid).to_string(), "|\n");
    }
}
