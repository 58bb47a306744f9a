//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, etc.).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
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
/// All fields are optional - if not specified, hardcoded defaults are
/// used. Corresponds to `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Accent theme name (e.g. "amber", "blue").
    #[serde(default)]
    pub theme: Option<String>,

    /// Path to a content document overriding the embedded one.
    #[serde(default)]
    pub content: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Rows moved per scroll key press.
    #[serde(default)]
    pub scroll_step: Option<usize>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Accent theme name.
    pub theme: String,
    /// Content document path; `None` means the embedded document.
    pub content: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Rows moved per scroll key press.
    pub scroll_step: usize,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: "amber".to_string(),
            content: None,
            log_file_path: default_log_path(),
            scroll_step: 1,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/folio/folio.log` on Unix-like systems, or the
/// platform-appropriate state path elsewhere. Falls back to the current
/// directory if the state directory cannot be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("folio").join("folio.log")
    } else {
        PathBuf::from("folio.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults). Returns `Err` if the file exists but cannot be read or
/// parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
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

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/folio/config.toml` on Unix, the appropriate path
/// on other platforms, or `None` if the home directory cannot be
/// determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FOLIO_CONFIG` environment variable
/// 3. Default path `~/.config/folio/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("FOLIO_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise
/// use the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        theme: config.theme.unwrap_or(defaults.theme),
        content: config.content.or(defaults.content),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        scroll_step: config.scroll_step.unwrap_or(defaults.scroll_step),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FOLIO_THEME`: override accent theme
/// - `FOLIO_CONTENT`: override content document path
/// - `FOLIO_LOG_FILE`: override log file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        config.theme = theme;
    }

    if let Ok(content) = std::env::var("FOLIO_CONTENT") {
        config.content = Some(PathBuf::from(content));
    }

    if let Ok(log_file) = std::env::var("FOLIO_LOG_FILE") {
        config.log_file_path = PathBuf::from(log_file);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the
/// user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args
/// (highest).
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    theme_override: Option<String>,
    content_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(theme) = theme_override {
        config.theme = theme;
    }

    if let Some(content) = content_override {
        config.content = Some(content);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
