pub mod action_log;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod line;
pub mod maze;
pub mod minimap;
pub mod player;
pub mod ray;
pub mod raycast;
pub mod wall;

pub use color::{MathColor, Rgb8};
pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use player::Player;
pub use ray::{HitResult, Ray, VisibleLight};
pub use raycast::{Frame, RayCaster};
pub use wall::{WallCatalog, WallCategory, WallState};
