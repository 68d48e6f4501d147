//! JogKit Settings Crate
//!
//! Handles jog panel configuration: parameter ranges and defaults, display
//! preferences, and loading/saving them as TOML or JSON.

pub mod config;
pub mod error;

pub use config::{Config, JogSettings, UiSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
