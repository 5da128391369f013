//! Configuration file loading with precedence handling.

use crate::state::alerts::{AlertTimings, ToastTimings};
use crate::state::FormConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TERMLOGIN_CONFIG";

/// Environment variable overriding the alert auto-dismiss delay (ms).
pub const ALERT_DISMISS_ENV_VAR: &str = "TERMLOGIN_ALERT_DISMISS_MS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
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
/// Corresponds to `~/.config/termlogin/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Delay before an alert dismisses itself, in milliseconds.
    #[serde(default)]
    pub alert_dismiss_ms: Option<u64>,

    /// Length of the alert exit animation, in milliseconds.
    #[serde(default)]
    pub alert_exit_ms: Option<u64>,

    /// Default toast lifetime, in milliseconds.
    #[serde(default)]
    pub toast_duration_ms: Option<u64>,

    /// Whether the password visibility toggle is rendered.
    #[serde(default)]
    pub show_visibility_toggle: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Alert auto-dismiss delay.
    pub alert_dismiss_ms: u64,
    /// Alert exit animation length.
    pub alert_exit_ms: u64,
    /// Default toast lifetime.
    pub toast_duration_ms: u64,
    /// Render the password visibility toggle.
    pub show_visibility_toggle: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: 5000,
            alert_exit_ms: 500,
            toast_duration_ms: 3000,
            show_visibility_toggle: true,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Form-level settings derived from this configuration.
    pub fn form_config(&self) -> FormConfig {
        FormConfig {
            show_visibility_toggle: self.show_visibility_toggle,
            alert_timings: AlertTimings {
                dismiss_after: Duration::from_millis(self.alert_dismiss_ms),
                exit_duration: Duration::from_millis(self.alert_exit_ms),
            },
            toast_timings: ToastTimings::default(),
            toast_duration: Duration::from_millis(self.toast_duration_ms),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/termlogin/termlogin.log` on Unix-like systems,
/// or the platform state/cache directory elsewhere.
///
/// If no such directory can be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir().or_else(dirs::cache_dir) {
        state_dir.join("termlogin").join("termlogin.log")
    } else {
        PathBuf::from("termlogin.log")
    }
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
/// Returns `~/.config/termlogin/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("termlogin").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TERMLOGIN_CONFIG` environment variable
/// 3. Default path `~/.config/termlogin/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
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

    ResolvedConfig {
        alert_dismiss_ms: config.alert_dismiss_ms.unwrap_or(defaults.alert_dismiss_ms),
        alert_exit_ms: config.alert_exit_ms.unwrap_or(defaults.alert_exit_ms),
        toast_duration_ms: config
            .toast_duration_ms
            .unwrap_or(defaults.toast_duration_ms),
        show_visibility_toggle: config
            .show_visibility_toggle
            .unwrap_or(defaults.show_visibility_toggle),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TERMLOGIN_ALERT_DISMISS_MS`: Override alert auto-dismiss delay
///
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(ALERT_DISMISS_ENV_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.alert_dismiss_ms = ms,
            Err(e) => warn!(
                value = %raw,
                error = %e,
                "Ignoring invalid {}", ALERT_DISMISS_ENV_VAR
            ),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    toggle_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(show) = toggle_override {
        config.show_visibility_toggle = show;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
