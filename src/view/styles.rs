//! Form styling configuration.
//!
//! Severity colors for alerts and toasts, plus the focus and error accents
//! used on the login card.

use crate::model::NotificationKind;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Explicit configuration.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== FormStyles =====

/// Styles for the login card and its notices.
///
/// With colors disabled every style falls back to modifiers only (bold,
/// dim, reversed), so focus and errors stay distinguishable on monochrome
/// terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormStyles {
    colors: bool,
}

impl FormStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        Self {
            colors: config.colors_enabled(),
        }
    }

    /// Whether colors are in use.
    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Border of an unfocused, valid input.
    pub fn border(&self) -> Style {
        self.fg(Color::DarkGray)
    }

    /// Border of the focused input.
    pub fn focused_border(&self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    /// Border and message of an errored input.
    pub fn error(&self) -> Style {
        self.fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    /// Raised floating label.
    pub fn raised_label(&self) -> Style {
        self.fg(Color::Cyan)
    }

    /// Resting label inside an empty, unfocused input.
    pub fn muted(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    /// Field text during the clear-form fade.
    pub fn fading(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    /// Enabled submit button.
    pub fn button(&self) -> Style {
        if self.colors {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    /// Disabled (busy) submit button.
    pub fn button_disabled(&self) -> Style {
        self.fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }

    /// Highlight for a focused button or selected alert.
    pub fn selection(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Severity color for an alert or toast.
    pub fn kind(&self, kind: NotificationKind) -> Style {
        let color = match kind {
            NotificationKind::Info => Color::Blue,
            NotificationKind::Success => Color::Green,
            NotificationKind::Warning => Color::Yellow,
            NotificationKind::Error => Color::Red,
        };
        self.fg(color)
    }

    fn fg(&self, color: Color) -> Style {
        if self.colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }
}

impl Default for FormStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}
