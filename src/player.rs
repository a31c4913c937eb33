use crate::Grid;
use rand::Rng;
use std::f64::consts::PI;

/// Viewer position and heading, in grid units and radians
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub direction: f64,
}

impl Player {
    pub fn new(x: f64, y: f64, direction: f64) -> Self {
        Player { x, y, direction }
    }

    /// Player at the grid's spawn point facing a random direction in [-π, π)
    pub fn at_spawn<R: Rng>(grid: &Grid, rng: &mut R) -> Self {
        let (x, y) = grid.spawn_point();
        Player::new(x, y, rng.gen_range(-PI..PI))
    }

    /// Turn by `angle`, then walk `step` along the new heading
    ///
    /// The heading is kept within [-2π, 2π].
    pub fn advance(&mut self, step: f64, angle: f64) {
        self.direction += angle;
        if self.direction < -2.0 * PI {
            self.direction += 2.0 * PI;
        } else if self.direction > 2.0 * PI {
            self.direction -= 2.0 * PI;
        }
        self.x += step * self.direction.cos();
        self.y += step * self.direction.sin();
    }

    /// Walk and/or turn unless the step would end inside a wall
    ///
    /// A step is checked against the current heading before the turn is
    /// applied. Returns false when the move was refused.
    pub fn try_move(&mut self, step: f64, angle: f64, grid: &Grid) -> bool {
        if step != 0.0 {
            let new_x = self.x + self.direction.cos() * step;
            let new_y = self.y + self.direction.sin() * step;
            if grid.is_colliding_with_wall(new_x, new_y) {
                return false;
            }
            self.advance(step, angle);
        } else if angle != 0.0 {
            self.advance(0.0, angle);
        }
        true
    }

    /// Grid cell the player stands in
    pub fn cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }

    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        self.cell() == (x, y)
    }
}
