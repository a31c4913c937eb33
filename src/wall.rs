use crate::color::{MathColor, Rgb8};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Colors a light can be built with
pub const LIGHT_PALETTE: [Rgb8; 8] = [
    Rgb8::new(0, 255, 0),     // green
    Rgb8::new(0, 0, 255),     // blue
    Rgb8::new(255, 0, 255),   // magenta
    Rgb8::new(255, 200, 0),   // orange
    Rgb8::new(255, 255, 0),   // yellow
    Rgb8::new(0, 255, 255),   // cyan
    Rgb8::new(255, 175, 175), // pink
    Rgb8::new(128, 0, 255),   // violet
];

/// Material of a single grid cell
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum WallState {
    /// Ordinary solid wall
    Default,
    /// Walkable space
    Empty,
    /// Boundary wall around the maze
    End,
    /// Walkable light source with its own color
    Light(MathColor),
}

impl WallState {
    pub fn is_empty(&self) -> bool {
        matches!(self, WallState::Empty | WallState::Light(_))
    }

    pub fn is_light(&self) -> bool {
        matches!(self, WallState::Light(_))
    }

    /// Whether the generator may place this variant
    pub fn is_generable(&self) -> bool {
        true
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self, WallState::End)
    }

    /// Absorption coefficient, applied as `e^-absorption`
    pub fn absorption(&self) -> f64 {
        match self {
            WallState::Default | WallState::End => 0.2,
            WallState::Empty => 0.0,
            WallState::Light(_) => -10.0,
        }
    }

    pub fn color(&self) -> MathColor {
        match self {
            WallState::Default => MathColor::from_rgb8(Rgb8::new(128, 128, 128)),
            WallState::End => MathColor::from_rgb8(Rgb8::new(255, 0, 0)),
            WallState::Empty => MathColor::BLACK,
            WallState::Light(color) => *color,
        }
    }

    /// Build a fresh instance of the same variant
    ///
    /// Lights draw a new palette color; the other variants carry no state.
    pub fn instantiate<R: Rng>(&self, rng: &mut R) -> WallState {
        match self {
            WallState::Light(_) => WallState::Light(random_light_color(rng)),
            other => *other,
        }
    }

    pub fn light<R: Rng>(rng: &mut R) -> WallState {
        WallState::Light(random_light_color(rng))
    }
}

fn random_light_color<R: Rng>(rng: &mut R) -> MathColor {
    MathColor::from_rgb8(LIGHT_PALETTE[rng.gen_range(0..LIGHT_PALETTE.len())])
}

/// The three categories the generator draws from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallCategory {
    Solid,
    Empty,
    Light,
}

/// Registry of wall variants, grouped by category
///
/// Passed by reference to the maze generator and grid. Randomness always
/// comes from the caller's rng, so a seeded rng gives a reproducible maze.
#[derive(Clone, Debug)]
pub struct WallCatalog {
    solid: Vec<WallState>,
    empty: Vec<WallState>,
    light: Vec<WallState>,
    boundary: WallState,
}

impl WallCatalog {
    /// Catalog with no registered variants (boundary is always `End`)
    pub fn empty() -> Self {
        WallCatalog {
            solid: Vec::new(),
            empty: Vec::new(),
            light: Vec::new(),
            boundary: WallState::End,
        }
    }

    /// Sort a variant into its category
    ///
    /// The boundary variant and non-generable variants are not drawn at random.
    pub fn register(&mut self, state: WallState) {
        if !state.is_generable() {
            return;
        }
        if state.is_light() {
            self.light.push(state);
        } else if !state.is_empty() && !state.is_boundary() {
            self.solid.push(state);
        } else if state.is_empty() {
            self.empty.push(state);
        }
    }

    pub fn variants(&self, category: WallCategory) -> &[WallState] {
        match category {
            WallCategory::Solid => &self.solid,
            WallCategory::Empty => &self.empty,
            WallCategory::Light => &self.light,
        }
    }

    pub fn boundary(&self) -> WallState {
        self.boundary
    }

    /// Pick one of the registered instances of a category
    ///
    /// Falls back to a built-in variant when nothing is registered.
    pub fn random_instance<R: Rng>(&self, category: WallCategory, rng: &mut R) -> WallState {
        let variants = self.variants(category);
        if variants.is_empty() {
            return fallback(category, rng);
        }
        variants[pick_index(rng, variants.len())]
    }

    /// Construct a new instance of a randomly chosen variant of a category
    pub fn new_random_instance<R: Rng>(&self, category: WallCategory, rng: &mut R) -> WallState {
        let variants = self.variants(category);
        if variants.is_empty() {
            return fallback(category, rng);
        }
        let prototype = variants[pick_index(rng, variants.len())];
        prototype.instantiate(rng)
    }
}

/// Uniform index below `len`; a single candidate needs no draw
pub(crate) fn pick_index<R: Rng>(rng: &mut R, len: usize) -> usize {
    if len == 1 {
        0
    } else {
        rng.gen_range(0..len)
    }
}

fn fallback<R: Rng>(category: WallCategory, rng: &mut R) -> WallState {
    match category {
        WallCategory::Solid => WallState::Default,
        WallCategory::Empty => WallState::Empty,
        WallCategory::Light => WallState::light(rng),
    }
}

impl Default for WallCatalog {
    fn default() -> Self {
        let mut catalog = WallCatalog::empty();
        catalog.register(WallState::Default);
        catalog.register(WallState::Empty);
        catalog.register(WallState::End);
        catalog.register(WallState::Light(MathColor::WHITE));
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_capabilities() {
        assert!(!WallState::Default.is_empty());
        assert!(!WallState::End.is_empty());
        assert!(WallState::Empty.is_empty());
        assert!(!WallState::Empty.is_light());

        let light = WallState::Light(MathColor::WHITE);
        assert!(light.is_empty());
        assert!(light.is_light());
        assert_eq!(light.absorption(), -10.0);
    }

    #[test]
    fn test_default_catalog_categories() {
        let catalog = WallCatalog::default();
        assert_eq!(catalog.variants(WallCategory::Solid), &[WallState::Default]);
        assert_eq!(catalog.variants(WallCategory::Empty), &[WallState::Empty]);
        assert_eq!(catalog.variants(WallCategory::Light).len(), 1);
        assert_eq!(catalog.boundary(), WallState::End);
    }

    #[test]
    fn test_new_light_instances_use_palette() {
        let catalog = WallCatalog::default();
        let mut rng = StdRng::seed_from_u64(7);
        let palette: Vec<MathColor> = LIGHT_PALETTE.iter().map(|c| MathColor::from_rgb8(*c)).collect();

        for _ in 0..50 {
            match catalog.new_random_instance(WallCategory::Light, &mut rng) {
                WallState::Light(color) => assert!(palette.contains(&color)),
                other => panic!("expected a light, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_catalog_is_deterministic_for_seeded_rng() {
        let catalog = WallCatalog::default();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(
                catalog.new_random_instance(WallCategory::Light, &mut a),
                catalog.new_random_instance(WallCategory::Light, &mut b)
            );
        }
    }

    #[test]
    fn test_empty_catalog_falls_back() {
        let catalog = WallCatalog::empty();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(catalog.random_instance(WallCategory::Solid, &mut rng), WallState::Default);
        assert_eq!(catalog.random_instance(WallCategory::Empty, &mut rng), WallState::Empty);
        assert!(catalog.random_instance(WallCategory::Light, &mut rng).is_light());
    }
}
