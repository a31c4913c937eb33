use crate::color::{MathColor, Rgb8};

/// Ray starting point and direction (radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin_x: f64,
    pub origin_y: f64,
    pub angle: f64,
}

impl Ray {
    pub fn new(origin_x: f64, origin_y: f64, angle: f64) -> Self {
        Ray {
            origin_x,
            origin_y,
            angle,
        }
    }

    pub fn direction(&self) -> (f64, f64) {
        (self.angle.cos(), self.angle.sin())
    }

    /// Point `distance` units along the ray
    pub fn point_at(&self, distance: f64) -> (f64, f64) {
        let (dx, dy) = self.direction();
        (self.origin_x + dx * distance, self.origin_y + dy * distance)
    }
}

/// One straight piece of a ray path, ending where it struck a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Impact point
    pub x: f64,
    pub y: f64,
    /// Length of this piece
    pub distance: f64,
    /// Color seen at the impact, before display conversion
    pub color: MathColor,
}

/// A light source reached by a ray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleLight {
    pub x: i32,
    pub y: i32,
    pub color: Rgb8,
}

impl VisibleLight {
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px.floor() as i32 == self.x && py.floor() as i32 == self.y
    }
}

/// What a screen column shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    pub distance: f64,
    pub color: Rgb8,
}

impl HitResult {
    /// Column for a ray that struck nothing
    pub const MISS: HitResult = HitResult {
        distance: f64::INFINITY,
        color: Rgb8::new(0, 0, 0),
    };

    pub fn is_miss(&self) -> bool {
        self.distance.is_infinite()
    }

    /// Wall height in pixels: `screen_height / distance`
    pub fn wall_height(&self, screen_height: f64) -> f64 {
        screen_height / self.distance
    }

    /// Vertically centered (top, height) of the wall strip, clipped to the screen
    pub fn column_span(&self, screen_height: f64) -> (f64, f64) {
        let height = self.wall_height(screen_height).min(screen_height);
        if !(height > 0.0) {
            return (screen_height / 2.0, 0.0);
        }
        (screen_height / 2.0 - height / 2.0, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_along_ray() {
        let ray = Ray::new(1.0, 1.0, 0.0);
        let (x, y) = ray.point_at(2.5);
        assert!((x - 3.5).abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_column_span() {
        let hit = HitResult {
            distance: 2.0,
            color: Rgb8::new(1, 2, 3),
        };
        assert_eq!(hit.wall_height(600.0), 300.0);
        assert_eq!(hit.column_span(600.0), (150.0, 300.0));

        // Closer than one unit fills the column
        let close = HitResult {
            distance: 0.0,
            color: Rgb8::new(1, 2, 3),
        };
        assert_eq!(close.column_span(600.0), (0.0, 600.0));

        assert_eq!(HitResult::MISS.column_span(600.0), (300.0, 0.0));
    }
}
