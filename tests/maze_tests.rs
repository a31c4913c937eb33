mod common;

use common::{free_cells, free_edges, has_boundary_ring, reachable_from, spawn_cell};
use lumaze::maze::{self, transform_dimension};
use lumaze::{Grid, WallCatalog, WallState};

#[test]
fn dimension_is_two_n_plus_one() {
    let catalog = WallCatalog::default();
    for n in 1..=12 {
        let grid = Grid::new(n, 0, n as u64 * 31, &catalog);
        assert_eq!(grid.dimension(), 2 * n + 1, "n = {}", n);
        assert_eq!(grid.cells().len(), (2 * n + 1) * (2 * n + 1));
    }
}

#[test]
fn boundary_ring_is_intact() {
    let catalog = WallCatalog::default();
    for seed in 0..20 {
        let grid = Grid::new(7, 3, seed, &catalog);
        assert!(has_boundary_ring(&grid), "seed {} broke the ring", seed);
    }
}

#[test]
fn every_free_cell_is_reachable_from_spawn() {
    let catalog = WallCatalog::default();
    for n in [1, 2, 3, 5, 8, 15] {
        for seed in 0..10 {
            let grid = Grid::new(n, 4, seed, &catalog);
            let free = free_cells(&grid);
            let reached = reachable_from(&grid, spawn_cell(&grid));
            assert_eq!(reached, free, "n = {}, seed = {}", n, seed);
        }
    }
}

#[test]
fn maze_is_a_tree() {
    // A perfect maze on 2n^2 - 1 free cells has exactly one edge fewer
    let catalog = WallCatalog::default();
    for n in [1, 2, 4, 9] {
        for seed in 0..10 {
            let grid = Grid::new(n, 0, seed, &catalog);
            let cells = free_cells(&grid).len();
            assert_eq!(cells, 2 * n * n - 1, "n = {}, seed = {}", n, seed);
            assert_eq!(free_edges(&grid), cells - 1, "cycle for n = {}, seed = {}", n, seed);
        }
    }
}

#[test]
fn logical_cells_are_always_carved() {
    let catalog = WallCatalog::default();
    let n = 6;
    let grid = Grid::new(n, 0, 99, &catalog);
    for y in (1..2 * n).step_by(2) {
        for x in (1..2 * n).step_by(2) {
            assert!(grid.get(x as i32, y as i32).is_empty(), "({}, {}) not carved", x, y);
        }
    }
}

#[test]
fn same_seed_same_maze() {
    let catalog = WallCatalog::default();
    let a = Grid::new(10, 5, 1234, &catalog);
    let b = Grid::new(10, 5, 1234, &catalog);
    assert_eq!(a.cells(), b.cells());
    assert_eq!(a.lights(), b.lights());
    assert_eq!(a.spawn_point(), b.spawn_point());

    let raw_a = maze::generate(10, 1234, &catalog);
    let raw_b = maze::generate(10, 1234, &catalog);
    assert_eq!(raw_a, raw_b);
}

#[test]
fn different_seeds_differ() {
    let catalog = WallCatalog::default();
    let mazes: Vec<String> = (0..5)
        .map(|seed| Grid::new(10, 0, seed, &catalog).to_ascii())
        .collect();
    let distinct: std::collections::HashSet<_> = mazes.iter().collect();
    assert!(distinct.len() > 1);
}

#[test]
fn single_cell_maze() {
    let grid = Grid::new(1, 0, 42, &WallCatalog::default());
    assert_eq!(grid.dimension(), transform_dimension(1));
    assert_eq!(grid.dimension(), 3);

    let boundary = grid
        .cells()
        .iter()
        .filter(|c| c.state == WallState::End)
        .count();
    assert_eq!(boundary, 8);
    assert_eq!(grid.get(1, 1), WallState::Empty);
    assert_eq!(grid.spawn_point(), (1.5, 1.5));
}
