use std::collections::VecDeque;

use log::{debug, trace};
use maze_core::Coord;

use crate::field::{Distance, DistanceField};
use crate::traits::Pather;

impl DistanceField {
    /// Breadth-first hop counts from a single origin.
    ///
    /// Returns an empty field if the shape is empty or `origin` lies outside
    /// it.
    pub fn from_origin<P: Pather>(pather: &P, origin: Coord) -> Self {
        Self::from_sources(pather, &[origin])
    }

    /// Multi-source breadth-first hop counts.
    ///
    /// Every in-bounds source is 0. The frontier is processed in whole
    /// rounds: a cell first discovered in round `k` gets exactly `k` and is
    /// never revisited. Cells that cannot be reached keep
    /// [`Distance::Unreached`]. Sources outside the shape are ignored; if
    /// none remain the field is empty.
    pub fn from_sources<P: Pather>(pather: &P, sources: &[Coord]) -> Self {
        let dims = pather.dims();
        if dims.is_empty() {
            return Self::empty();
        }

        let mut cells = vec![Distance::Unreached; dims.len()];
        let mut frontier: VecDeque<Coord> = VecDeque::new();

        for &src in sources {
            let Some(si) = dims.index(src) else {
                continue;
            };
            if cells[si].is_reached() {
                continue;
            }
            cells[si] = Distance::Reached(0);
            frontier.push_back(src);
        }
        if frontier.is_empty() {
            debug!("bfs: no source inside {dims}, returning empty field");
            return Self::empty();
        }

        let mut nbuf = Vec::with_capacity(4);
        let mut round: u32 = 0;

        while !frontier.is_empty() {
            round += 1;
            // Only the cells queued by the previous round belong to this one.
            for _ in 0..frontier.len() {
                let Some(cur) = frontier.pop_front() else {
                    break;
                };
                nbuf.clear();
                pather.neighbors(cur, &mut nbuf);

                for &n in nbuf.iter() {
                    let Some(ni) = dims.index(n) else {
                        continue;
                    };
                    if cells[ni].is_reached() {
                        continue;
                    }
                    cells[ni] = Distance::Reached(round);
                    frontier.push_back(n);
                }
            }
            trace!("bfs: round {round} queued {} cells", frontier.len());
        }

        let field = Self { dims, cells };
        debug!(
            "bfs: {} of {} cells reached, max distance {:?}",
            field.reached_count(),
            dims.len(),
            field.max_distance()
        );
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Grid, Label};

    fn field_of(text: &str) -> (Grid, DistanceField) {
        let grid = Grid::parse(text).unwrap();
        let origin = grid.find(Label::Origin).unwrap();
        let field = DistanceField::from_origin(&grid, origin);
        (grid, field)
    }

    #[test]
    fn open_two_by_two() {
        let (_, f) = field_of("S.\n.E");
        assert_eq!(f.to_signed_rows(), vec![vec![0, 1], vec![1, 2]]);
    }

    #[test]
    fn walls_are_unreached_and_detoured() {
        let (g, f) = field_of(
            "
S.X.
.XX.
....",
        );
        assert_eq!(
            f.to_signed_rows(),
            vec![vec![0, 1, -1, 7], vec![1, -1, -1, 6], vec![2, 3, 4, 5]]
        );
        for (c, d) in f.iter() {
            if g.is_blocked(c) {
                assert_eq!(d, Distance::Unreached);
            }
        }
    }

    #[test]
    fn sealed_cells_stay_unreached() {
        let (_, f) = field_of("S.X.\n..X.");
        assert_eq!(f.at(Coord::new(0, 3)), Distance::Unreached);
        assert_eq!(f.at(Coord::new(1, 3)), Distance::Unreached);
        assert_eq!(f.reached_count(), 4);
        assert_eq!(f.max_distance(), Some(2));
    }

    #[test]
    fn out_of_bounds_origin_gives_empty_field() {
        let g = Grid::parse("S.\n..").unwrap();
        assert!(DistanceField::from_origin(&g, Coord::new(2, 0)).is_empty());
        assert!(DistanceField::from_origin(&g, Coord::new(0, -1)).is_empty());
    }

    #[test]
    fn empty_grid_gives_empty_field() {
        let g = Grid::from_labels(0, 0, Vec::new()).unwrap();
        assert!(DistanceField::from_origin(&g, Coord::ZERO).is_empty());
    }

    #[test]
    fn multi_source() {
        let g = Grid::parse(".....").unwrap();
        let f = DistanceField::from_sources(&g, &[Coord::new(0, 0), Coord::new(0, 4)]);
        assert_eq!(f.to_signed(), vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn duplicate_and_stray_sources() {
        let g = Grid::parse("...").unwrap();
        let f = DistanceField::from_sources(
            &g,
            &[Coord::new(0, 0), Coord::new(0, 0), Coord::new(5, 5)],
        );
        assert_eq!(f.to_signed(), vec![0, 1, 2]);
    }
}
