use crate::color::{as_light, mix, MathColor, Rgb8};
use crate::grid::Grid;
use crate::line::Line2D;
use crate::player::Player;
use crate::ray::{HitResult, Ray, Segment, VisibleLight};
use crate::wall::WallState;
use std::collections::HashSet;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

/// Horizontal field of view in degrees
pub const FIELD_OF_VIEW: f64 = 90.0;
/// Distance between two samples along a ray
pub const MOVE_STEP: f64 = 0.1;
/// Upper bound on the distance a ray may travel, bounces included
pub const MAX_TRAVEL: f64 = 10_000.0;
/// Upper bound on the number of bounces per ray
pub const MAX_REFLECTIONS: usize = 8;

/// Everything a single ray produced
#[derive(Debug, Clone, PartialEq)]
pub struct RayTrace {
    /// One entry per struck cell, in order
    pub segments: Vec<Segment>,
    pub reflections: usize,
    /// Total distance marched, all segments included
    pub travel: f64,
    /// Light source that ended the ray, if any
    pub light: Option<VisibleLight>,
}

impl RayTrace {
    /// Column result: the first impact as seen from the ray origin
    pub fn hit(&self) -> HitResult {
        match self.segments.first() {
            Some(segment) => HitResult {
                distance: segment.distance,
                color: segment.color.to_display(),
            },
            None => HitResult::MISS,
        }
    }
}

/// Output of one rendered frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// One entry per screen column, left to right
    pub columns: Vec<HitResult>,
    pub visible_lights: HashSet<VisibleLight>,
    /// Set when the viewer stands inside a light and the screen is one flat color
    pub fill: Option<Rgb8>,
}

impl Frame {
    /// Whether the player stands inside one of the lights seen this frame
    pub fn is_player_in_light(&self, player: &Player) -> bool {
        self.visible_lights
            .iter()
            .any(|light| light.contains(player.x, player.y))
    }
}

/// Face of a solid cell a ray went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    /// Face along a column boundary (x constant)
    Vertical,
    /// Face along a row boundary (y constant)
    Horizontal,
}

/// Marches rays through a grid, bouncing them off walls
pub struct RayCaster<'a> {
    grid: &'a Grid,
    width: usize,
    height: usize,
    fov: f64,
}

impl<'a> RayCaster<'a> {
    /// Raycaster for a `width` x `height` screen; `width` must be at least 1
    pub fn new(grid: &'a Grid, width: usize, height: usize) -> Self {
        RayCaster {
            grid,
            width,
            height,
            fov: FIELD_OF_VIEW.to_radians(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Field of view in radians
    pub fn fov(&self) -> f64 {
        self.fov
    }

    /// Angle of the ray cast for screen column `column`
    pub fn ray_angle(&self, direction: f64, column: usize) -> f64 {
        let width = self.width as f64;
        claim_angle(direction + self.fov * ((column as f64 - width / 2.0) / width))
    }

    /// Half the angle between two neighbouring columns
    fn probe_angle(&self) -> f64 {
        self.fov / self.width as f64 / 2.0
    }

    /// Cast one ray per screen column from the player's position
    pub fn render(&self, player: &Player) -> Frame {
        let (cx, cy) = player.cell();
        if self.grid.check_address(cx, cy) {
            if let WallState::Light(color) = self.grid.get(cx, cy) {
                return self.light_fill(cx, cy, color);
            }
        }

        let mut columns = Vec::with_capacity(self.width);
        let mut visible_lights = HashSet::new();
        for column in 0..self.width {
            let angle = self.ray_angle(player.direction, column);
            let trace = self.cast_ray(Ray::new(player.x, player.y, angle));
            if let Some(light) = trace.light {
                visible_lights.insert(light);
            }
            columns.push(trace.hit());
        }

        Frame {
            columns,
            visible_lights,
            fill: None,
        }
    }

    /// Frame for a viewer standing inside a light: a single flat color
    fn light_fill(&self, x: i32, y: i32, color: MathColor) -> Frame {
        let fill = mix(&MathColor::WHITE, &color).to_display();
        let mut visible_lights = HashSet::new();
        visible_lights.insert(VisibleLight {
            x,
            y,
            color: color.to_rgb8(),
        });
        Frame {
            columns: vec![
                HitResult {
                    distance: 0.0,
                    color: fill,
                };
                self.width
            ],
            visible_lights,
            fill: Some(fill),
        }
    }

    /// March a ray until it leaves the grid, reaches a light, or runs out of
    /// bounces or distance
    pub fn cast_ray(&self, ray: Ray) -> RayTrace {
        let mut current = ray;
        let mut line = Line2D::through(current.origin_x, current.origin_y, current.angle);

        let mut distance = 0.0;
        let mut travel = 0.0;
        let mut marched = 0.0;
        let mut reflections = 0;
        // Distance of the last sample on this segment that was in a free cell
        let mut last_free: Option<f64> = None;
        let mut segments: Vec<Segment> = Vec::new();
        let mut light = None;

        while travel + distance < MAX_TRAVEL && reflections < MAX_REFLECTIONS {
            marched = travel + distance;
            let (px, py) = current.point_at(distance);
            let cx = px.floor() as i32;
            let cy = py.floor() as i32;

            if !self.grid.check_address(cx, cy) {
                break;
            }

            let state = self.grid.get(cx, cy);
            if state.is_light() {
                let color = as_light(
                    &state
                        .color()
                        .multiply(distance)
                        .multiply(state.absorption()),
                );
                segments.push(Segment {
                    x: px,
                    y: py,
                    distance,
                    color,
                });
                // Light reaching the eye also brightens every earlier bounce
                let last = segments.len() - 1;
                for segment in &mut segments[..last] {
                    segment.color = mix(&segment.color, &color);
                }
                light = Some(VisibleLight {
                    x: cx,
                    y: cy,
                    color: state.color().to_rgb8(),
                });
                break;
            }

            if !state.is_empty() {
                segments.push(Segment {
                    x: px,
                    y: py,
                    distance,
                    color: state
                        .color()
                        .multiply(distance)
                        .multiply(state.absorption()),
                });

                let restart = last_free.unwrap_or(distance);
                let pivot = current.point_at(restart);
                let angle = self.reflect_angle(&line, pivot, (cx, cy), current.angle);
                reflections += 1;

                travel += restart;
                current = Ray::new(pivot.0, pivot.1, angle);
                line = Line2D::through(pivot.0, pivot.1, angle);
                distance = 0.0;
                last_free = None;
                continue;
            }

            last_free = Some(distance);
            distance += MOVE_STEP;
        }

        RayTrace {
            segments,
            reflections,
            travel: marched,
            light,
        }
    }

    /// Direction after bouncing off the solid cell `wall`
    ///
    /// `line` is the incoming segment and `pivot` the last free point before
    /// the impact. Two auxiliary lines, turned by half a column angle to each
    /// side around the pivot, are followed to the near vertical and near
    /// horizontal faces of the struck cell. The cells just across those faces
    /// tell which face was hit; the angle is then mirrored about that face,
    /// or about a diagonal when the two sides disagree (a corner).
    /// When no side finds a solid cell the angle comes back unchanged.
    pub fn reflect_angle(&self, line: &Line2D, pivot: (f64, f64), wall: (i32, i32), angle: f64) -> f64 {
        let (dx, dy) = (angle.cos(), angle.sin());
        let delta = self.probe_angle();
        let left = self.struck_edge(&line.rotate(pivot.0, delta), pivot, wall, (dx, dy));
        let right = self.struck_edge(&line.rotate(pivot.0, -delta), pivot, wall, (dx, dy));

        let alpha = match (left, right) {
            (Some(Edge::Vertical), Some(Edge::Vertical))
            | (Some(Edge::Vertical), None)
            | (None, Some(Edge::Vertical)) => FRAC_PI_2,
            (Some(Edge::Horizontal), Some(Edge::Horizontal))
            | (Some(Edge::Horizontal), None)
            | (None, Some(Edge::Horizontal)) => 0.0,
            (Some(_), Some(_)) => {
                // Corner: mirror across the diagonal facing the ray
                if dx * dy > 0.0 {
                    3.0 * FRAC_PI_4
                } else {
                    FRAC_PI_4
                }
            }
            // Known approximation: nothing solid behind either face, so the
            // struck edge is undetermined and the ray keeps its heading
            (None, None) => return angle,
        };

        claim_angle(2.0 * alpha - angle)
    }

    /// Which face of `wall` the auxiliary line goes through first
    fn struck_edge(&self, aux: &Line2D, pivot: (f64, f64), wall: (i32, i32), dir: (f64, f64)) -> Option<Edge> {
        let (wx, wy) = wall;
        let face_x = if dir.0 >= 0.0 { wx as f64 } else { (wx + 1) as f64 };
        let face_y = if dir.1 >= 0.0 { wy as f64 } else { (wy + 1) as f64 };

        // Crossing of the vertical face, probing the cell in the wall's column
        let vertical = if (face_x - pivot.0) * dir.0 >= 0.0 {
            let y = aux.y_at(face_x);
            let state = self.probe(wx as f64, y);
            Some((distance(pivot, (face_x, y)), state))
        } else {
            None
        };

        // Crossing of the horizontal face, probing the cell in the wall's row
        let horizontal = if (face_y - pivot.1) * dir.1 >= 0.0 {
            let x = aux.x_at(face_y);
            let state = self.probe(x, wy as f64);
            Some((distance(pivot, (x, face_y)), state))
        } else {
            None
        };

        let solid = |probe: &Option<(f64, WallState)>| match probe {
            Some((d, state)) if !state.is_empty() && d.is_finite() => Some(*d),
            _ => None,
        };

        match (solid(&vertical), solid(&horizontal)) {
            (Some(v), Some(h)) => Some(if v < h { Edge::Vertical } else { Edge::Horizontal }),
            (Some(_), None) => Some(Edge::Vertical),
            (None, Some(_)) => Some(Edge::Horizontal),
            (None, None) => None,
        }
    }

    /// State of the cell containing (x, y); outside the grid reads as empty
    fn probe(&self, x: f64, y: f64) -> WallState {
        if !x.is_finite() || !y.is_finite() {
            return WallState::Empty;
        }
        let (cx, cy) = (x.floor() as i32, y.floor() as i32);
        if !self.grid.check_address(cx, cy) {
            return WallState::Empty;
        }
        self.grid.get(cx, cy)
    }
}

/// Wrap an angle into [0, 2π)
pub fn claim_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}
