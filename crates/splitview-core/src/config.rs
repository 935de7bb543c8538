// ABOUTME: Application and layout configuration handling.
// ABOUTME: Loads settings from TOML config files and checks them for sanity.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{MIN_HEIGHT, MIN_WIDTH, SEPARATOR_WIDTH};

/// Geometry settings for the split view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum pixel width of a horizontal pane while dragging
    pub min_width: u32,

    /// Minimum pixel height of the nav content and dock while dragging
    pub min_height: u32,

    /// Divider hitbox width (the visual rule is drawn inside it)
    pub separator_width: u32,

    /// Initial share of the nav pane height given to the nav content
    pub nav_fraction: f64,

    /// Initial share of the nav pane height given to the dock strip
    pub dock_fraction: f64,

    /// Start with the dock strip hidden
    pub dock_hidden: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
            separator_width: SEPARATOR_WIDTH,
            nav_fraction: 0.95,
            dock_fraction: 0.05,
            dock_hidden: false,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_width == 0 || self.min_height == 0 {
            return Err(ConfigError::Invalid(
                "minimum pane sizes must be non-zero".to_string(),
            ));
        }
        if self.separator_width == 0 {
            return Err(ConfigError::Invalid(
                "separator_width must be non-zero".to_string(),
            ));
        }
        for (name, value) in [
            ("nav_fraction", self.nav_fraction),
            ("dock_fraction", self.dock_fraction),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window dimensions
    pub window_width: u32,
    pub window_height: u32,

    /// Initial pane visibility
    pub hide_left: bool,
    pub hide_right: bool,

    /// Split view geometry
    pub layout: LayoutConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1200,
            window_height: 800,
            hide_left: false,
            hide_right: true,
            layout: LayoutConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl Config {
    /// Get the default config file path (~/.config/splitview/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("splitview").join("config.toml"))
    }

    /// Load and validate config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found or invalid
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_default_from(&path),
            None => Self::default(),
        }
    }

    /// Load config from a path; a missing file is silent, an invalid one is logged
    pub fn load_or_default_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid(
                "window dimensions must be non-zero".to_string(),
            ));
        }
        self.layout.validate()
    }
}
