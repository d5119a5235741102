use std::io::Read;
use std::path::Path;

use crate::render::Renderer;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    Dimensions { rows: usize, cols: usize },
    #[error("spawn value must be a power of two >= 2, got {0}")]
    SpawnValue(u32),
}

/// Game settings. Every field may be omitted from the TOML file.
///
/// ```toml
/// rows = 5
/// cols = 5
/// seed = 42
/// color = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    /// Value placed by each spawn.
    pub spawn_value: u32,
    /// Fixed RNG seed for reproducible games; entropy when `None`.
    pub seed: Option<u64>,
    /// Verbose logging plus merge markers in the board display.
    pub debug: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: defaults::rows(),
            cols: defaults::cols(),
            spawn_value: defaults::spawn_value(),
            seed: None,
            debug: false,
            color: false,
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = std::fs::File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        Ok(cfg)
    }

    /// Reject values the engine would treat as contract violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Dimensions { rows: self.rows, cols: self.cols });
        }
        if self.spawn_value < 2 || !self.spawn_value.is_power_of_two() {
            return Err(ConfigError::SpawnValue(self.spawn_value));
        }
        Ok(())
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.debug, self.color)
    }
}

mod defaults {
    pub fn rows() -> usize { 4 }
    pub fn cols() -> usize { 4 }
    pub fn spawn_value() -> u32 { 2 }
}
