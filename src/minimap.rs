use crate::color::Rgb8;
use crate::grid::Grid;
use crate::player::Player;
use crate::wall::WallState;

/// How a minimap square is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Filled square
    Wall(Rgb8),
    /// Disc inside the square
    Light(Rgb8),
}

/// One square of the minimap, relative to the player's cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniMapTile {
    pub dx: i32,
    pub dy: i32,
    pub kind: TileKind,
}

/// Top-down view of the cells around the player
pub struct MiniMap {
    radius: i32,
    size: f32,
}

impl MiniMap {
    pub fn new(radius: i32, size: f32) -> Self {
        MiniMap { radius, size }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Pixel size of one cell
    pub fn scale(&self) -> f32 {
        self.size / (2 * self.radius + 1) as f32
    }

    /// Top-left pixel of the square for tile offset (dx, dy)
    pub fn tile_origin(&self, dx: i32, dy: i32) -> (f32, f32) {
        let scale = self.scale();
        ((dx + self.radius) as f32 * scale, (dy + self.radius) as f32 * scale)
    }

    /// Non-empty and light cells within `radius` of the player's cell
    ///
    /// Ordinary walls are white; every other solid uses its own color.
    pub fn tiles(&self, grid: &Grid, player: &Player) -> Vec<MiniMapTile> {
        let (px, py) = player.cell();
        let mut tiles = Vec::new();
        for dy in -self.radius..=self.radius {
            for dx in -self.radius..=self.radius {
                let (x, y) = (px + dx, py + dy);
                if !grid.check_address(x, y) {
                    continue;
                }
                let state = grid.get(x, y);
                let kind = match state {
                    WallState::Default => TileKind::Wall(Rgb8::new(255, 255, 255)),
                    WallState::Light(color) => TileKind::Light(color.to_rgb8()),
                    WallState::Empty => continue,
                    other => TileKind::Wall(other.color().to_rgb8()),
                };
                tiles.push(MiniMapTile { dx, dy, kind });
            }
        }
        tiles
    }
}
