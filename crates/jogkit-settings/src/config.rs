//! Configuration for JogKit
//!
//! Configuration is organized into logical sections:
//! - Jog settings (feed rate and distance ranges, steps, defaults)
//! - UI preferences (display unit, panel collapsed at startup)
//!
//! Files are TOML or JSON, picked by extension, and validated on both load
//! and save.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use jogkit_core::{MeasurementSystem, ParameterSpec, FEED_RATE, JOG_DISTANCE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
pub const APP_DIR: &str = "jogkit";

/// Default config file name
pub const CONFIG_FILE: &str = "config.toml";

/// Jog parameter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JogSettings {
    /// Feed rate in mm/min
    #[serde(default = "default_feed_rate")]
    pub feed_rate: ParameterSpec,
    /// Jog distance in mm
    #[serde(default = "default_distance")]
    pub distance: ParameterSpec,
}

fn default_feed_rate() -> ParameterSpec {
    FEED_RATE
}

fn default_distance() -> ParameterSpec {
    JOG_DISTANCE
}

impl Default for JogSettings {
    fn default() -> Self {
        Self {
            feed_rate: FEED_RATE,
            distance: JOG_DISTANCE,
        }
    }
}

/// UI preference settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Measurement system used for position display at startup
    #[serde(default)]
    pub measurement_system: MeasurementSystem,
    /// Start with the position display collapsed
    #[serde(default)]
    pub start_collapsed: bool,
}

/// Jog panel configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Jog settings
    #[serde(default)]
    pub jog: JogSettings,
    /// UI preferences
    #[serde(default)]
    pub ui: UiSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => {
            let ext = other.unwrap_or("<none>").to_string();
            Err(ConfigError::UnsupportedFormat(ext).into())
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location, `<config dir>/jogkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        for (key, spec) in [
            ("jog.feed_rate", &self.jog.feed_rate),
            ("jog.distance", &self.jog.distance),
        ] {
            spec.validate()
                .map_err(|source| ConfigError::InvalidParameter {
                    key: key.to_string(),
                    source,
                })?;
        }
        Ok(())
    }
}
