mod common;

use common::{parse_grid, spawn_cell};
use lumaze::{Grid, Player, WallCatalog, WallCategory, WallState};
use std::collections::HashSet;

#[test]
fn lights_are_placed_on_free_cells_away_from_spawn() {
    let catalog = WallCatalog::default();
    for seed in 0..25 {
        let grid = Grid::new(6, 7, seed, &catalog);
        let spawn = spawn_cell(&grid);
        let lights: HashSet<_> = grid.lights().iter().copied().collect();

        assert_eq!(lights.len(), 7, "seed {}", seed);
        assert!(!lights.contains(&spawn), "seed {} put a light on the spawn", seed);
        for &(x, y) in &lights {
            assert!(grid.get(x, y).is_light());
            assert!(x > 0 && y > 0 && (x as usize) < grid.dimension() - 1);
            assert!((y as usize) < grid.dimension() - 1);
        }
        let light_cells = grid.cells().iter().filter(|c| c.state.is_light()).count();
        assert_eq!(light_cells, 7);
    }
}

#[test]
fn light_count_is_capped_by_free_cells() {
    let catalog = WallCatalog::default();
    // n = 2 leaves 7 free cells; one of them is the spawn
    let grid = Grid::new(2, 100, 5, &catalog);
    assert_eq!(grid.lights().len(), 6);
    assert!(grid.get(spawn_cell(&grid).0, spawn_cell(&grid).1) == WallState::Empty);

    let grid = Grid::new(1, 3, 42, &catalog);
    assert!(grid.lights().is_empty());
}

#[test]
fn light_colors_come_from_the_catalog() {
    let catalog = WallCatalog::default();
    let palette: Vec<_> = lumaze::wall::LIGHT_PALETTE.to_vec();
    let grid = Grid::new(8, 10, 77, &catalog);
    for &(x, y) in grid.lights() {
        let color = grid.get(x, y).color().to_rgb8();
        assert!(palette.contains(&color), "{:?} not in palette", color);
    }
}

#[test]
fn empty_light_category_falls_back_to_built_in_light() {
    let mut catalog = WallCatalog::empty();
    catalog.register(WallState::Default);
    catalog.register(WallState::End);
    catalog.register(WallState::Empty);
    assert!(catalog.variants(WallCategory::Light).is_empty());

    let grid = Grid::new(3, 2, 8, &catalog);
    assert_eq!(grid.lights().len(), 2);
    for &(x, y) in grid.lights() {
        assert!(grid.get(x, y).is_light());
    }
}

#[test]
fn collision_covers_walls_and_outside() {
    let grid = parse_grid(
        "#####\n\
         #S X#\n\
         # * #\n\
         #####\n\
         #####\n",
    );
    assert!(!grid.is_colliding_with_wall(1.5, 1.5));
    assert!(!grid.is_colliding_with_wall(2.2, 2.7)); // light
    assert!(grid.is_colliding_with_wall(3.5, 1.5));
    assert!(grid.is_colliding_with_wall(0.2, 2.5));
    assert!(grid.is_colliding_with_wall(-0.1, 1.5));
    assert!(grid.is_colliding_with_wall(1.5, 5.0));
    assert!(grid.is_colliding_with_wall(f64::INFINITY, 1.5));

    for cell in grid.cells() {
        if !cell.state.is_empty() {
            let (cx, cy) = cell.center();
            assert!(grid.is_colliding_with_wall(cx, cy));
        }
    }
}

#[test]
fn player_walks_the_generated_maze_without_entering_walls() {
    let catalog = WallCatalog::default();
    let grid = Grid::new(5, 2, 2024, &catalog);
    let (sx, sy) = grid.spawn_point();
    let mut player = Player::new(sx, sy, 0.3);
    for i in 0..500 {
        let turn = if i % 37 == 0 { 1.1 } else { 0.0 };
        player.try_move(0.1, turn, &grid);
        assert!(!grid.is_colliding_with_wall(player.x, player.y));
    }
}

#[test]
fn ascii_picture_round_trips_through_parser() {
    let grid = Grid::new(4, 0, 3, &WallCatalog::default());
    let parsed = parse_grid(&grid.to_ascii());
    assert_eq!(parsed.dimension(), grid.dimension());
    assert_eq!(parsed.spawn_point(), grid.spawn_point());
    for (a, b) in parsed.cells().iter().zip(grid.cells()) {
        assert_eq!(a.state, b.state);
    }
}
