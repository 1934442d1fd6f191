use crate::models::Coord;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
///
/// Loaded from the config file with sensible defaults for every field,
/// so a missing file just means "stock setup".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub map: MapConfig,
    pub location: LocationConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Load config from the default location, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)
                .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            // No config file? Use defaults
            Ok(Self::default())
        }
    }

    /// Save config to disk
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, contents)?;
        Ok(())
    }

    /// Config file path: XDG on Linux/macOS, AppData on Windows
    fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("tacotrail");

        Ok(config_dir.join("config.toml"))
    }
}

/// Which map surface to compose at startup.
///
/// This is the one place the interactive-vs-embedded decision is made;
/// everything downstream goes through the presenter trait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapBackendKind {
    #[default]
    Interactive,
    Embedded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default)]
    pub backend: MapBackendKind,

    /// Default region center - downtown Chattanooga
    #[serde(default = "default_center_latitude")]
    pub center_latitude: f64,

    #[serde(default = "default_center_longitude")]
    pub center_longitude: f64,

    /// Zoom level for the embedded map URL
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Viewport size of the interactive map, in degrees
    #[serde(default = "default_span")]
    pub latitude_span: f64,

    #[serde(default = "default_span")]
    pub longitude_span: f64,
}

impl MapConfig {
    pub fn center(&self) -> Coord {
        Coord::new(self.center_latitude, self.center_longitude)
    }
}

fn default_center_latitude() -> f64 {
    35.0456
}

fn default_center_longitude() -> f64 {
    -85.3097
}

fn default_zoom() -> u8 {
    15
}

fn default_span() -> f64 {
    0.02
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            backend: MapBackendKind::default(),
            center_latitude: default_center_latitude(),
            center_longitude: default_center_longitude(),
            zoom: default_zoom(),
            latitude_span: default_span(),
            longitude_span: default_span(),
        }
    }
}

/// Location collaborator settings.
///
/// A fixed position stands in for a device GPS; leave both fields unset
/// and the app behaves as if permission were denied.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocationConfig {
    #[serde(default)]
    pub fixed_latitude: Option<f64>,

    #[serde(default)]
    pub fixed_longitude: Option<f64>,
}

impl LocationConfig {
    pub fn fixed_position(&self) -> Option<Coord> {
        match (self.fixed_latitude, self.fixed_longitude) {
            (Some(latitude), Some(longitude)) => Some(Coord::new(latitude, longitude)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable mouse support in TUI
    #[serde(default = "default_mouse")]
    pub mouse_enabled: bool,
}

fn default_mouse() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: default_mouse(),
        }
    }
}
