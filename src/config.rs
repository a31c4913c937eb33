use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub minimap: MiniMapConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct WorldConfig {
    /// Logical cells per side; the grid is `2 * dimension + 1` wide
    #[serde(default = "default_dimension")]
    pub dimension: usize,
    #[serde(default = "default_lights")]
    pub lights: usize,
    /// Fixed seed; a random one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct PlayerConfig {
    #[serde(default = "default_move_step")]
    pub move_step: f64,
    #[serde(default = "default_rotation_step")]
    pub rotation_step: f64,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct MiniMapConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_minimap_radius")]
    pub radius: i32,
    #[serde(default = "default_minimap_size")]
    pub size: f32,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Color behind the wall strips, as `[r, g, b]`
    #[serde(default = "default_background")]
    pub background: [u8; 3],
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_enable_action_log")]
    pub enable_action_log: bool,
    #[serde(default = "default_action_log_path")]
    pub action_log_path: String,
}

// Default values
fn default_dimension() -> usize { 10 }
fn default_lights() -> usize { 5 }
fn default_width() -> usize { 1000 }
fn default_height() -> usize { 700 }
fn default_move_step() -> f64 { 0.1 }
fn default_rotation_step() -> f64 { 0.1 }
fn default_minimap_radius() -> i32 { 10 }
fn default_minimap_size() -> f32 { 200.0 }
fn default_window_title() -> String { "Lumaze".to_string() }
fn default_background() -> [u8; 3] { [0, 0, 0] }
fn default_enable_action_log() -> bool { true }
fn default_action_log_path() -> String { "action_log.json".to_string() }

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            lights: default_lights(),
            seed: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_step: default_move_step(),
            rotation_step: default_rotation_step(),
        }
    }
}

impl Default for MiniMapConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            radius: default_minimap_radius(),
            size: default_minimap_size(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            background: default_background(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_action_log: default_enable_action_log(),
            action_log_path: default_action_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            render: RenderConfig::default(),
            player: PlayerConfig::default(),
            minimap: MiniMapConfig::default(),
            visual: VisualConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match Config::from_toml_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from config.toml");
                    config
                }
                Err(e) => {
                    eprintln!("Warning: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.world.dimension < 1 {
            return Err(Error::InvalidConfig("world.dimension must be at least 1".to_string()));
        }
        if self.render.width < 1 || self.render.height < 1 {
            return Err(Error::InvalidConfig("render size must be at least 1x1".to_string()));
        }
        if self.minimap.radius < 0 {
            return Err(Error::InvalidConfig("minimap.radius must not be negative".to_string()));
        }
        Ok(())
    }
}
