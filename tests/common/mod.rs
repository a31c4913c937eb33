#![allow(dead_code)]

use lumaze::{Grid, MathColor, WallState};
use std::collections::{HashSet, VecDeque};

/// Build a grid from a text picture, one line per row
///
/// `#` boundary, `█` or `X` wall, `*` white light, `S` spawn (free cell),
/// space or `.` free cell.
pub fn parse_grid(picture: &str) -> Grid {
    let mut spawn = (0.0, 0.0);
    let rows: Vec<Vec<WallState>> = picture
        .lines()
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, c)| match c {
                    '#' => WallState::End,
                    '█' | 'X' => WallState::Default,
                    '*' => WallState::Light(MathColor::WHITE),
                    'S' => {
                        spawn = (x as f64 + 0.5, y as f64 + 0.5);
                        WallState::Empty
                    }
                    _ => WallState::Empty,
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows, spawn)
}

/// Free cells reachable from `start` through 4-neighbour free cells
pub fn reachable_from(grid: &Grid, start: (i32, i32)) -> HashSet<(i32, i32)> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);

    while let Some((x, y)) = queue.pop_front() {
        for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if grid.check_address(nx, ny) && grid.get(nx, ny).is_empty() && seen.insert((nx, ny)) {
                queue.push_back((nx, ny));
            }
        }
    }
    seen
}

/// All free cells, lights included
pub fn free_cells(grid: &Grid) -> HashSet<(i32, i32)> {
    grid.cells()
        .iter()
        .filter(|c| c.state.is_empty())
        .map(|c| (c.x, c.y))
        .collect()
}

/// Number of adjacent free-cell pairs
pub fn free_edges(grid: &Grid) -> usize {
    let free = free_cells(grid);
    free.iter()
        .map(|&(x, y)| {
            [(x + 1, y), (x, y + 1)]
                .iter()
                .filter(|n| free.contains(n))
                .count()
        })
        .sum()
}

/// Whether the outer ring of the grid is entirely boundary walls
pub fn has_boundary_ring(grid: &Grid) -> bool {
    let last = grid.dimension() as i32 - 1;
    grid.cells()
        .iter()
        .filter(|c| c.x == 0 || c.y == 0 || c.x == last || c.y == last)
        .all(|c| c.state == WallState::End)
}

pub fn spawn_cell(grid: &Grid) -> (i32, i32) {
    let (x, y) = grid.spawn_point();
    (x.floor() as i32, y.floor() as i32)
}
