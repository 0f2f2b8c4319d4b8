//! Discovery and loading of `navopts.toml`, plus command-line overrides.

use super::schema::{NormalizerConfig, Platform, ValidationLevel};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up during discovery
pub const CONFIG_FILE_NAME: &str = "navopts.toml";

/// Why a configuration could not be loaded
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read navopts.toml: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid navopts.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// One message per rejected setting
    #[error("navopts.toml rejected:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

/// Command-line flags that take precedence over the file
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the pass-through key
    pub pass_through_key: Option<String>,
    /// Override the target platform
    pub platform: Option<Platform>,
    /// Override the deprecation level
    pub deprecation_level: Option<ValidationLevel>,
    /// Enable lazy component registration
    pub lazy_components: Option<bool>,
}

/// Locate the configuration for the current working directory.
///
/// The nearest `navopts.toml` in the directory or one of its ancestors wins;
/// otherwise the user-level file from [`find_xdg_config`] is used.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from).or_else(find_xdg_config)
}

/// `$XDG_CONFIG_HOME/navopts/navopts.toml`, falling back to `~/.config`.
pub fn find_xdg_config() -> Option<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(env::var_os("HOME")?).join(".config"),
    };
    Some(base.join("navopts").join(CONFIG_FILE_NAME)).filter(|path| path.is_file())
}

/// Nearest `navopts.toml` at or above `start`.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    start.ancestors().map(|dir| dir.join(CONFIG_FILE_NAME)).find(|path| path.is_file())
}

/// Load `path`, or the discovered configuration when `path` is `None`.
///
/// Without any configuration file the defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<NormalizerConfig, ConfigError> {
    match path.map(Path::to_path_buf).or_else(find_config) {
        Some(path) => read_config(&path),
        None => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(NormalizerConfig::default())
        }
    }
}

fn read_config(path: &Path) -> Result<NormalizerConfig, ConfigError> {
    let config: NormalizerConfig = toml::from_str(&fs::read_to_string(path)?)?;

    let problems: Vec<String> = config.validate().iter().map(ToString::to_string).collect();
    if !problems.is_empty() {
        return Err(ConfigError::Validation(problems));
    }

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Apply every flag that was given on top of `config`.
pub fn merge_cli_overrides(config: &mut NormalizerConfig, overrides: &CliOverrides) {
    if let Some(ref key) = overrides.pass_through_key {
        config.walk.pass_through_key = key.clone();
    }

    if let Some(platform) = overrides.platform {
        config.walk.platform = platform;
    }

    if let Some(level) = overrides.deprecation_level {
        config.deprecations.level = level;
    }

    if let Some(lazy) = overrides.lazy_components {
        config.components.lazy_registration = lazy;
    }
}
