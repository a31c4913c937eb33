//! Perfect maze generation with Eller's algorithm.
//!
//! Logical cells sit at odd coordinates of a `(2n+1) x (2n+1)` grid; the even
//! rows and columns between them are walls that get carved into connectors.
//! Rows are processed top to bottom while a flat array of set ids tracks which
//! cells of the current row are already connected.

use crate::grid::Cell;
use crate::wall::{pick_index, WallCatalog, WallCategory, WallState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rounds of coin flips a set gets to link downward before one member is forced
pub const MAX_LINK_ROUNDS: usize = 16;

/// Grid dimension for a maze of `n` logical cells per side, walls included
pub fn transform_dimension(n: usize) -> usize {
    2 * n + 1
}

/// Row-major index of (x, y)
pub fn index(x: usize, y: usize, dimension: usize) -> usize {
    y * dimension + x
}

/// Inverse of `index`
pub fn coords(index: usize, dimension: usize) -> (usize, usize) {
    (index % dimension, index / dimension)
}

/// Generate the maze for seed `seed`
pub fn generate(n: usize, seed: u64, catalog: &WallCatalog) -> Vec<Cell> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with(n, &mut rng, catalog)
}

/// Generate the maze drawing randomness from `rng`
///
/// Requires `n >= 1`.
pub fn generate_with<R: Rng>(n: usize, rng: &mut R, catalog: &WallCatalog) -> Vec<Cell> {
    let dimension = transform_dimension(n);
    let mut states: Vec<WallState> = (0..dimension * dimension)
        .map(|_| catalog.random_instance(WallCategory::Solid, rng))
        .collect();

    let boundary = catalog.boundary();
    for i in 0..dimension {
        states[index(i, 0, dimension)] = boundary;
        states[index(i, dimension - 1, dimension)] = boundary;
        states[index(0, i, dimension)] = boundary;
        states[index(dimension - 1, i, dimension)] = boundary;
    }

    let mut carver = Carver {
        states: &mut states,
        dimension,
        catalog,
    };
    let mut sets = RowSets::new(n);

    for row in 0..n {
        let y = 2 * row + 1;
        let last_row = row == n - 1;
        sets.assign_unassigned();

        // Horizontal connectors. The last row joins everything still apart.
        for col in 1..n {
            if sets.same_set(col - 1, col) {
                continue;
            }
            if last_row || rng.gen_bool(0.5) {
                sets.merge(col, col - 1);
                carver.carve(2 * col, y, rng);
            }
        }

        for col in 0..n {
            carver.carve(2 * col + 1, y, rng);
        }

        if last_row {
            break;
        }

        // Vertical connectors: every set reaches the next row at least once
        let mut next = vec![0; n];
        for members in sets.groups() {
            let set_id = sets.id(members[0]);
            let mut linked = false;
            for _ in 0..MAX_LINK_ROUNDS {
                for &col in &members {
                    if rng.gen_bool(0.5) {
                        next[col] = set_id;
                        linked = true;
                    }
                }
                if linked {
                    break;
                }
            }
            if !linked {
                let col = members[pick_index(rng, members.len())];
                next[col] = set_id;
            }
            for &col in &members {
                if next[col] == set_id {
                    carver.carve(2 * col + 1, y + 1, rng);
                }
            }
        }
        sets.replace(next);
    }

    states
        .into_iter()
        .enumerate()
        .map(|(i, state)| {
            let (x, y) = coords(i, dimension);
            Cell::new(x as i32, y as i32, state)
        })
        .collect()
}

struct Carver<'a> {
    states: &'a mut [WallState],
    dimension: usize,
    catalog: &'a WallCatalog,
}

impl Carver<'_> {
    fn carve<R: Rng>(&mut self, x: usize, y: usize, rng: &mut R) {
        self.states[index(x, y, self.dimension)] =
            self.catalog.random_instance(WallCategory::Empty, rng);
    }
}

/// Set ids of the cells in the current row, 0 meaning unassigned
#[derive(Debug, Clone)]
struct RowSets {
    ids: Vec<u32>,
    next_id: u32,
}

impl RowSets {
    fn new(width: usize) -> Self {
        RowSets {
            ids: vec![0; width],
            next_id: 1,
        }
    }

    fn assign_unassigned(&mut self) {
        for id in self.ids.iter_mut() {
            if *id == 0 {
                *id = self.next_id;
                self.next_id += 1;
            }
        }
    }

    fn id(&self, col: usize) -> u32 {
        self.ids[col]
    }

    fn same_set(&self, a: usize, b: usize) -> bool {
        self.ids[a] == self.ids[b]
    }

    /// Move every member of `from`'s set into `into`'s set
    fn merge(&mut self, from: usize, into: usize) {
        let old = self.ids[from];
        let new = self.ids[into];
        for id in self.ids.iter_mut() {
            if *id == old {
                *id = new;
            }
        }
    }

    /// Columns grouped by set, in order of first appearance
    fn groups(&self) -> Vec<Vec<usize>> {
        let mut order: Vec<u32> = Vec::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (col, &id) in self.ids.iter().enumerate() {
            match order.iter().position(|&seen| seen == id) {
                Some(slot) => groups[slot].push(col),
                None => {
                    order.push(id);
                    groups.push(vec![col]);
                }
            }
        }
        groups
    }

    fn replace(&mut self, ids: Vec<u32>) {
        self.ids = ids;
    }
}
