//! Command-line arguments and config resolution

use crate::console::HELP;
use anyhow::Context;
use clap::Parser;
use jogkit_settings::{Config, SettingsResult};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(name = "jogkit", version)]
#[command(about = "Headless jog console for GRBL-style CNC controllers")]
#[command(after_help = HELP)]
pub struct Cli {
    /// Config file (.toml or .json); defaults to <config dir>/jogkit/config.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load the configuration this invocation asks for
    pub fn load_config(&self) -> anyhow::Result<Config> {
        resolve_config(self.config.as_deref(), Config::default_path())
    }
}

/// Load `explicit` if given, else the platform default path
///
/// A missing file yields defaults. With no explicit path and no platform
/// config directory, defaults are used and a warning is logged.
pub fn resolve_config(
    explicit: Option<&Path>,
    default_path: SettingsResult<PathBuf>,
) -> anyhow::Result<Config> {
    let path = match (explicit, default_path) {
        (Some(path), _) => path.to_path_buf(),
        (None, Ok(path)) => path,
        (None, Err(e)) => {
            tracing::warn!("{}; using built-in defaults", e);
            return Ok(Config::default());
        }
    };
    Config::load_or_default(&path).with_context(|| format!("Failed to load {}", path.display()))
}
