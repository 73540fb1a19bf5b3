//! Configuration file loading with precedence handling.

use crate::config::ScreenConfig;
use crate::state::{ContentMode, DeviceMode, SubtitleTexts};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "VMGRAPH_CONFIG";

/// Environment variable overriding the initial device mode.
pub const DEVICE_MODE_ENV_VAR: &str = "VMGRAPH_DEVICE_MODE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or values.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/vmgraph/config.toml`.
///
/// ```toml
/// title = "Title"
/// root_width = 40
/// subtitle_width = 24
/// device_mode = "regular"
/// content_mode = "short"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    /// Label above the subtitle.
    pub title: Option<String>,

    /// Frame width in cells.
    #[serde(default)]
    pub root_width: Option<u16>,

    /// Subtitle box width in cells.
    #[serde(default)]
    pub subtitle_width: Option<u16>,

    /// Subtitle text in short mode.
    #[serde(default)]
    pub short_text: Option<String>,

    /// Subtitle text in long mode.
    #[serde(default)]
    pub long_text: Option<String>,

    #[serde(default)]
    /// Initial device mode (`compact` or `regular`).
    pub device_mode: Option<DeviceMode>,

    #[serde(default)]
    /// Initial content mode (`short` or `long`).
    pub content_mode: Option<ContentMode>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Graph and presenter settings.
    pub screen: ScreenConfig,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/vmgraph/vmgraph.log` on Unix-like systems,
/// or appropriate platform path on other systems. Falls back to the current
/// directory if the state directory cannot be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("vmgraph").join("vmgraph.log")
    } else {
        PathBuf::from("vmgraph.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/vmgraph/config.toml` on Unix, appropriate path on other
/// platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vmgraph").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    debug!(path = %path.display(), "config file loaded");
    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `VMGRAPH_CONFIG` environment variable
/// 3. Default path `~/.config/vmgraph/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error if a config file exists but cannot be read or parsed, or
/// if `VMGRAPH_CONFIG` is set to something that is not valid UTF-8.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let screen = defaults.screen;
    let texts = SubtitleTexts::new(
        config
            .short_text
            .map_or_else(|| screen.texts.short.clone(), Into::into),
        config
            .long_text
            .map_or_else(|| screen.texts.long.clone(), Into::into),
    );

    ResolvedConfig {
        screen: ScreenConfig {
            title: config.title.unwrap_or(screen.title),
            root_width: config.root_width.unwrap_or(screen.root_width),
            subtitle_width: config.subtitle_width.unwrap_or(screen.subtitle_width),
            texts,
            device_mode: config.device_mode.unwrap_or(screen.device_mode),
            content_mode: config.content_mode.unwrap_or(screen.content_mode),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `VMGRAPH_DEVICE_MODE`: initial device mode (`compact` or `regular`)
///
/// Unrecognized values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(DEVICE_MODE_ENV_VAR) {
        match raw.parse::<DeviceMode>() {
            Ok(mode) => config.screen.device_mode = mode,
            Err(err) => warn!(var = DEVICE_MODE_ENV_VAR, %err, "ignoring invalid override"),
        }
    }

    config
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--device-mode`
    pub device_mode: Option<DeviceMode>,
    /// `--content-mode`
    pub content_mode: Option<ContentMode>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(mode) = overrides.device_mode {
        config.screen.device_mode = mode;
    }

    if let Some(mode) = overrides.content_mode {
        config.screen.content_mode = mode;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
