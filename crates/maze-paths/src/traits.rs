use maze_core::{Coord, Dims, Grid};

/// Minimal search interface: a bounded shape plus neighbour enumeration.
pub trait Pather {
    /// Shape of the searchable area.
    fn dims(&self) -> Dims;

    /// Append the cells reachable in one move from `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}

/// A [`Grid`] moves 4-connected into any in-bounds cell that is not blocked,
/// in the order up, down, left, right.
impl Pather for Grid {
    #[inline]
    fn dims(&self) -> Dims {
        Grid::dims(self)
    }

    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_passable(n)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_neighbors_skip_walls_and_edges() {
        let g = Grid::parse("S#\n..").unwrap();
        let mut buf = Vec::new();
        g.neighbors(Coord::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Coord::new(1, 0)]);

        buf.clear();
        g.neighbors(Coord::new(1, 1), &mut buf);
        assert_eq!(buf, vec![Coord::new(1, 0)]);
    }

    #[test]
    fn grid_neighbors_keep_order() {
        let g = Grid::parse("...\n.S.\n...").unwrap();
        let mut buf = Vec::new();
        g.neighbors(Coord::new(1, 1), &mut buf);
        assert_eq!(buf, Coord::new(1, 1).neighbors_4().to_vec());
    }
}
