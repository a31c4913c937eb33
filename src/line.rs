/// Line in slope-intercept form, `y = k * x + b`
///
/// Used by the reflection classifier to find where a ray (or a slightly
/// rotated copy of it) crosses the row and column of an impact point.
/// Vertical lines are approximated by a very large slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2D {
    /// Slope
    pub k: f64,
    /// Y-intercept
    pub b: f64,
}

impl Line2D {
    pub fn new(k: f64, b: f64) -> Self {
        Line2D { k, b }
    }

    /// Line through (x0, y0) at `angle` radians from the x axis
    pub fn through(x0: f64, y0: f64, angle: f64) -> Self {
        let k = angle.tan();
        Line2D { k, b: y0 - k * x0 }
    }

    /// Line through two points
    pub fn between(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        let k = (y1 - y0) / (x1 - x0);
        Line2D { k, b: y0 - k * x0 }
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.k * x + self.b
    }

    /// X for a given y; infinite or NaN for horizontal lines
    pub fn x_at(&self, y: f64) -> f64 {
        (y - self.b) / self.k
    }

    /// Inclination in (-π/2, π/2)
    pub fn angle(&self) -> f64 {
        self.k.atan()
    }

    /// Rotate by `angle` around the point of the line at `x0`
    pub fn rotate(&self, x0: f64, angle: f64) -> Self {
        Line2D::through(x0, self.y_at(x0), self.angle() + angle)
    }

    /// Perpendicular slope with the same intercept
    pub fn normal(&self) -> Self {
        Line2D::new(-1.0 / self.k, self.b)
    }
}
