use crate::maze::{self, transform_dimension};
use crate::wall::{WallCatalog, WallCategory, WallState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A grid coordinate together with its material
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub state: WallState,
}

impl Cell {
    pub fn new(x: i32, y: i32, state: WallState) -> Self {
        Cell { x, y, state }
    }

    /// Whether the point (px, py) lies inside this cell
    pub fn is_point_inside(&self, px: f64, py: f64) -> bool {
        px.floor() as i32 == self.x && py.floor() as i32 == self.y
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x as f64 + 0.5, self.y as f64 + 0.5)
    }
}

/// Square maze grid with a boundary ring, light sources and a spawn point
///
/// Cells are stored row-major: `cells[y * dimension + x]`.
#[derive(Clone, Debug)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
    seed: u64,
    spawn_point: (f64, f64),
    lights: Vec<(i32, i32)>,
}

impl Grid {
    /// Generate a maze of `n` logical cells per side and place up to
    /// `light_count` lights in it
    ///
    /// Requires `n >= 1`. Asking for more lights than there are free cells
    /// (the spawn cell excluded) places as many as fit.
    pub fn new(n: usize, light_count: usize, seed: u64, catalog: &WallCatalog) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = maze::generate_with(n, &mut rng, catalog);
        let mut grid = Grid {
            dimension: transform_dimension(n),
            cells,
            seed,
            spawn_point: (0.0, 0.0),
            lights: Vec::new(),
        };

        let mut free = grid.empty_cells();
        let spawn = free.remove(rng.gen_range(0..free.len()));
        grid.spawn_point = (spawn.0 as f64 + 0.5, spawn.1 as f64 + 0.5);

        for _ in 0..light_count {
            if free.is_empty() {
                break;
            }
            let (x, y) = free.remove(rng.gen_range(0..free.len()));
            grid.set(x, y, catalog.new_random_instance(WallCategory::Light, &mut rng));
            grid.lights.push((x, y));
        }

        grid
    }

    /// Build a grid from explicit rows of states (row `y` is `rows[y]`)
    ///
    /// Rows must all be `rows.len()` long. Light cells are picked up from the
    /// states; the spawn point is given by the caller.
    pub fn from_rows(rows: Vec<Vec<WallState>>, spawn_point: (f64, f64)) -> Self {
        let dimension = rows.len();
        let mut cells = Vec::with_capacity(dimension * dimension);
        let mut lights = Vec::new();
        for (y, row) in rows.into_iter().enumerate() {
            for (x, state) in row.into_iter().enumerate() {
                if state.is_light() {
                    lights.push((x as i32, y as i32));
                }
                cells.push(Cell::new(x as i32, y as i32, state));
            }
        }
        Grid {
            dimension,
            cells,
            seed: 0,
            spawn_point,
            lights,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn spawn_point(&self) -> (f64, f64) {
        self.spawn_point
    }

    /// Coordinates of the placed light sources
    pub fn lights(&self) -> &[(i32, i32)] {
        &self.lights
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dimension)
    }

    /// Convert (x, y) coordinates to cell index
    fn get_id(&self, x: i32, y: i32) -> usize {
        maze::index(x as usize, y as usize, self.dimension)
    }

    /// Cell at (x, y); the address must pass `check_address`
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.cells[self.get_id(x, y)]
    }

    /// State at (x, y); the address must pass `check_address`
    pub fn get(&self, x: i32, y: i32) -> WallState {
        self.cells[self.get_id(x, y)].state
    }

    /// Replace the state at (x, y); the address must pass `check_address`
    pub fn set(&mut self, x: i32, y: i32, state: WallState) {
        let id = self.get_id(x, y);
        self.cells[id].state = state;
    }

    /// Check whether (x, y) is inside the grid
    pub fn check_address(&self, x: i32, y: i32) -> bool {
        let dimension = self.dimension as i32;
        x >= 0 && x < dimension && y >= 0 && y < dimension
    }

    /// True when the point lies in a non-empty cell or outside the grid
    pub fn is_colliding_with_wall(&self, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return true;
        }
        let grid_x = x.floor() as i32;
        let grid_y = y.floor() as i32;
        if !self.check_address(grid_x, grid_y) {
            return true;
        }
        !self.get(grid_x, grid_y).is_empty()
    }

    /// Empty cells that are not lights, in row-major order
    pub fn empty_cells(&self) -> Vec<(i32, i32)> {
        self.cells
            .iter()
            .filter(|c| c.state.is_empty() && !c.state.is_light())
            .map(|c| (c.x, c.y))
            .collect()
    }

    /// Text picture of the maze
    /// - `#`: boundary
    /// - `█`: wall
    /// - `*`: light
    /// - `S`: spawn
    /// - ` `: free cell
    pub fn to_ascii(&self) -> String {
        let spawn = (
            self.spawn_point.0.floor() as i32,
            self.spawn_point.1.floor() as i32,
        );
        let mut result = String::new();
        for row in self.rows() {
            for cell in row {
                let symbol = if (cell.x, cell.y) == spawn {
                    'S'
                } else {
                    match cell.state {
                        WallState::End => '#',
                        WallState::Default => '█',
                        WallState::Light(_) => '*',
                        WallState::Empty => ' ',
                    }
                };
                result.push(symbol);
            }
            result.push('\n');
        }
        result
    }
}
