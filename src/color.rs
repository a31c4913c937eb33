use serde::{Deserialize, Serialize};

/// 8-bit display color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
}

/// Color with three f64 channels, nominally in [0, 1]
///
/// Channels are allowed to leave the unit range while light is being
/// accumulated; `clamped()` brings them back before display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MathColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl MathColor {
    pub const BLACK: MathColor = MathColor::new(0.0, 0.0, 0.0);
    pub const WHITE: MathColor = MathColor::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        MathColor { r, g, b }
    }

    pub fn from_rgb8(color: Rgb8) -> Self {
        MathColor::new(
            color.r as f64 / 255.0,
            color.g as f64 / 255.0,
            color.b as f64 / 255.0,
        )
    }

    /// Scale every channel by `e^-factor`
    ///
    /// Used for falloff over distance and for material absorption. A negative
    /// factor brightens.
    pub fn multiply(&self, factor: f64) -> Self {
        let fading = fading_factor(factor);
        MathColor::new(self.r * fading, self.g * fading, self.b * fading)
    }

    /// Add `other * e^-factor` to this color (tinting by a second source)
    pub fn multiply_with(&self, other: &MathColor, factor: f64) -> Self {
        let fading = fading_factor(factor);
        MathColor::new(
            self.r + other.r * fading,
            self.g + other.g * fading,
            self.b + other.b * fading,
        )
    }

    pub fn clamped(&self) -> Self {
        self.map(|c| c.clamp(0.0, 1.0))
    }

    /// Apply `f` to each channel
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        MathColor::new(f(self.r), f(self.g), f(self.b))
    }

    /// Exact conversion of the clamped color: `round(channel * 255)`
    pub fn to_rgb8(&self) -> Rgb8 {
        let c = self.clamped();
        Rgb8::new(to_byte(c.r), to_byte(c.g), to_byte(c.b))
    }

    /// Clamp, compress with `normalize`, then convert to 8 bits
    pub fn to_display(&self) -> Rgb8 {
        self.clamped().map(normalize).to_rgb8()
    }
}

impl From<Rgb8> for MathColor {
    fn from(color: Rgb8) -> Self {
        MathColor::from_rgb8(color)
    }
}

fn fading_factor(x: f64) -> f64 {
    (-x).exp()
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

/// Dynamic range compression applied before display: `log2(1 + x)`
pub fn normalize(x: f64) -> f64 {
    (1.0 + x).log2()
}

/// Per-channel mean
pub fn mix(a: &MathColor, b: &MathColor) -> MathColor {
    MathColor::new((a.r + b.r) / 2.0, (a.g + b.g) / 2.0, (a.b + b.b) / 2.0)
}

/// Per-channel minimum
pub fn musk(color: &MathColor, mask: &MathColor) -> MathColor {
    MathColor::new(
        color.r.min(mask.r),
        color.g.min(mask.g),
        color.b.min(mask.b),
    )
}

/// Glow transform for light sources: brighten by `e^10`, then `sqrt(0.75 * x)`
pub fn as_light(color: &MathColor) -> MathColor {
    color.multiply(-10.0).map(|x| (3.0 * x * 0.25).sqrt())
}
