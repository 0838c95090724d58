use std::collections::HashSet;

use maze_core::{Coord, Grid, GridBuilder, Label};
use maze_paths::{
    Distance, DistanceField, Path, PathEnumerator, count_shortest_paths, shortest_paths,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn markers(grid: &Grid) -> (Coord, Coord) {
    (
        grid.find(Label::Origin).expect("origin marker"),
        grid.find(Label::Destination).expect("destination marker"),
    )
}

fn random_grid(rng: &mut impl Rng, rows: usize, cols: usize, density: f64) -> Grid {
    let mut b = GridBuilder::new(rows, cols).unwrap();
    b.fill_fn(|_| {
        if rng.random_bool(density) {
            Label::Blocked
        } else {
            Label::Free
        }
    });
    b.set(Coord::ZERO, Label::Origin);
    b.set(
        Coord::new(rows as i32 - 1, cols as i32 - 1),
        Label::Destination,
    );
    b.build()
}

/// Every reached cell other than the origin sits one above its closest
/// passable neighbour; passable cells left unreached have no reached
/// neighbour.
fn assert_bfs_recurrence(grid: &Grid, field: &DistanceField, origin: Coord) {
    assert_eq!(field.at(origin), Distance::Reached(0));
    for (c, d) in field.iter() {
        if grid.is_blocked(c) {
            assert_eq!(d, Distance::Unreached, "blocked {c} was reached");
            continue;
        }
        let best = c
            .neighbors_4()
            .into_iter()
            .filter(|&n| grid.is_passable(n))
            .filter_map(|n| field.at(n).value())
            .min();
        match d {
            Distance::Reached(0) => assert_eq!(c, origin),
            Distance::Reached(v) => assert_eq!(Some(v - 1), best, "bad distance at {c}"),
            Distance::Unreached => assert_eq!(best, None, "{c} next to a reached cell"),
        }
    }
}

fn assert_shortest(paths: &[Path], grid: &Grid, field: &DistanceField, origin: Coord, dest: Coord) {
    let total = field.at(dest).value().expect("destination reached");
    for p in paths {
        assert_eq!(p.origin(), Some(origin));
        assert_eq!(p.destination(), Some(dest));
        assert_eq!(p.len(), total as usize + 1);
        assert_eq!(p.verify(grid, field), Ok(()));
        for c in p {
            assert!(!grid.is_blocked(*c));
        }
    }
    let unique: HashSet<&Path> = paths.iter().collect();
    assert_eq!(unique.len(), paths.len(), "duplicate paths");
}

#[test]
fn open_two_by_two() {
    let grid = Grid::from_labels(2, 2, vec![2, 0, 0, 3]).unwrap();
    let (origin, dest) = markers(&grid);
    let field = DistanceField::from_origin(&grid, origin);
    assert_eq!(field.to_signed_rows(), vec![vec![0, 1], vec![1, 2]]);

    let paths = shortest_paths(&field, dest);
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| p.len() == 3));
    assert_shortest(&paths, &grid, &field, origin, dest);
}

#[test]
fn wall_makes_destination_unreachable() {
    let grid = Grid::parse(
        "
S.#..
..#.E
..#..",
    )
    .unwrap();
    let (origin, dest) = markers(&grid);
    let field = DistanceField::from_origin(&grid, origin);
    assert_eq!(field.at(dest), Distance::Unreached);
    assert_eq!(field.at(dest).to_signed(), -1);
    assert!(shortest_paths(&field, dest).is_empty());
    assert_eq!(count_shortest_paths(&field, dest), 0);
}

#[test]
fn origin_equals_destination() {
    let grid = Grid::parse("S..\n.#.\n...").unwrap();
    let origin = grid.find(Label::Origin).unwrap();
    let field = DistanceField::from_origin(&grid, origin);
    assert_eq!(field.at(origin), Distance::Reached(0));
    let paths = shortest_paths(&field, origin);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].nodes(), &[origin]);
}

#[test]
fn two_detours_around_central_obstacle() {
    let grid = Grid::parse(
        "
...
S#E
...",
    )
    .unwrap();
    let (origin, dest) = markers(&grid);
    let field = DistanceField::from_origin(&grid, origin);
    let paths = shortest_paths(&field, dest);
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].len(), paths[1].len());
    assert_eq!(paths[0].len(), 5);
    assert_shortest(&paths, &grid, &field, origin, dest);

    let passes: HashSet<Coord> = paths.iter().map(|p| p.nodes()[2]).collect();
    assert_eq!(
        passes,
        HashSet::from([Coord::new(0, 1), Coord::new(2, 1)])
    );
}

#[test]
fn backward_walk_reverses_to_increasing_distances() {
    let grid = Grid::parse(
        "
......
....X.
..XXX.
E.XS..
..XXX.
....X.
......",
    )
    .unwrap();
    let (origin, dest) = markers(&grid);
    let field = DistanceField::from_origin(&grid, origin);
    let total = field.at(dest).value().unwrap();
    for p in shortest_paths(&field, dest) {
        let ds: Vec<u32> = p.iter().map(|&c| field.at(c).value().unwrap()).collect();
        assert_eq!(ds, (0..=total).collect::<Vec<_>>());

        let mut backward = p.nodes().to_vec();
        backward.reverse();
        assert_eq!(backward[0], dest);
        assert_eq!(*backward.last().unwrap(), origin);
    }
}

#[test]
fn idempotent() {
    let grid = Grid::parse("S...\n.X..\n..X.\nX..E").unwrap();
    let (origin, dest) = markers(&grid);
    let a = DistanceField::from_origin(&grid, origin);
    let b = DistanceField::from_origin(&grid, origin);
    assert_eq!(a, b);

    let pa: HashSet<Path> = shortest_paths(&a, dest).into_iter().collect();
    let pb: HashSet<Path> = shortest_paths(&b, dest).into_iter().collect();
    assert_eq!(pa, pb);
}

#[test]
fn random_mazes_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..60 {
        let grid = random_grid(&mut rng, 6, 7, 0.3);
        let (origin, dest) = markers(&grid);
        let field = DistanceField::from_origin(&grid, origin);
        assert_bfs_recurrence(&grid, &field, origin);

        let paths = shortest_paths(&field, dest);
        assert_eq!(paths.len() as u128, count_shortest_paths(&field, dest));
        if field.at(dest).is_reached() {
            assert!(!paths.is_empty());
            assert_shortest(&paths, &grid, &field, origin, dest);
        } else {
            assert!(paths.is_empty());
        }
    }
}

#[test]
fn limit_caps_large_open_grids() {
    let grid = Grid::from_labels(12, 12, vec![0; 144]).unwrap();
    let field = DistanceField::from_origin(&grid, Coord::ZERO);
    let dest = Coord::new(11, 11);
    // C(22, 11)
    assert_eq!(count_shortest_paths(&field, dest), 705_432);

    let run = PathEnumerator::new(&field).with_limit(100).run(dest);
    assert!(run.truncated);
    assert_eq!(run.paths.len(), 100);
    assert_shortest(&run.paths, &grid, &field, Coord::ZERO, dest);
}
