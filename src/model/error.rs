//! Error types for termlogin.
//!
//! Validation failures are not errors in this sense: they are ordinary
//! values ([`crate::model::ValidationResult`]) surfaced on the form. The
//! types here cover infrastructure failures only.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary's run path
//!   - [`ConfigError`] - Config file could not be read or parsed
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//!   - [`TuiError`] - Terminal setup, drawing or event polling failed

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Domain-specific errors convert via `From`, so the run path can use `?`
/// throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    ///
    /// A missing config file is not an error; this only fires when a file
    /// exists but is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI failure. Fatal: the form cannot be shown.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),

    /// The accepted credentials could not be written to stdout.
    #[error("Failed to hand off credentials: {0}")]
    Handoff(#[from] serde_json::Error),
}
