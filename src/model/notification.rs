//! Severity kinds shared by alerts and toasts.

use std::str::FromStr;
use thiserror::Error;

/// Severity of an alert or toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    /// Neutral information (default).
    #[default]
    Info,
    /// Something succeeded.
    Success,
    /// Something needs attention.
    Warning,
    /// Something failed.
    Error,
}

/// Returned when a kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown notification kind: {0}")]
pub struct UnknownKind(pub String);

impl NotificationKind {
    /// Glyph rendered in front of the message.
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✔",
            NotificationKind::Error | NotificationKind::Warning => "⚠",
            NotificationKind::Info => "ℹ",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(NotificationKind::Info),
            "success" => Ok(NotificationKind::Success),
            "warning" | "warn" => Ok(NotificationKind::Warning),
            "error" | "danger" => Ok(NotificationKind::Error),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// Description of an alert present when the form starts.
///
/// Parsed from `KIND:MESSAGE` on the command line. When the prefix is not
/// a known kind the whole text is the message and the kind is `Info`.
/// `KIND!:MESSAGE` shows the alert without a close control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertSpec {
    /// Severity.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
    /// Whether the alert carries a manual close control.
    pub closable: bool,
}

impl AlertSpec {
    /// Build a closable alert.
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            closable: true,
        }
    }

    /// Drop the manual close control.
    pub fn without_close(mut self) -> Self {
        self.closable = false;
        self
    }

    /// Parse `KIND:MESSAGE` or `KIND!:MESSAGE`.
    pub fn parse(text: &str) -> Self {
        if let Some((prefix, rest)) = text.split_once(':') {
            let (name, pinned) = match prefix.trim_end().strip_suffix('!') {
                Some(name) => (name, true),
                None => (prefix, false),
            };
            if let Ok(kind) = name.parse::<NotificationKind>() {
                let spec = Self::new(kind, rest.trim());
                return if pinned { spec.without_close() } else { spec };
            }
        }
        Self::new(NotificationKind::Info, text.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_is_rejected() {
        assert_eq!(
            "sparkly".parse::<NotificationKind>(),
            Err(UnknownKind("sparkly".to_string()))
        );
    }

    #[test]
    fn kind_names_are_case_insensitive() {
        assert_eq!(
            "ERROR".parse::<NotificationKind>(),
            Ok(NotificationKind::Error)
        );
        assert_eq!(
            " Warning ".parse::<NotificationKind>(),
            Ok(NotificationKind::Warning)
        );
    }

    #[test]
    fn warning_and_error_share_an_icon() {
        assert_eq!(
            NotificationKind::Warning.icon(),
            NotificationKind::Error.icon()
        );
        assert_ne!(NotificationKind::Info.icon(), NotificationKind::Success.icon());
    }

    #[test]
    fn alert_spec_parses_kind_prefix() {
        let spec = AlertSpec::parse("error: Invalid username or password");
        assert_eq!(spec.kind, NotificationKind::Error);
        assert_eq!(spec.message, "Invalid username or password");
        assert!(spec.closable);
    }

    #[test]
    fn alert_spec_without_known_prefix_keeps_whole_text() {
        let spec = AlertSpec::parse("Note: maintenance at 5pm");
        assert_eq!(spec.kind, NotificationKind::Info);
        assert_eq!(spec.message, "Note: maintenance at 5pm");
    }

    #[test]
    fn bang_after_kind_drops_close_control() {
        let spec = AlertSpec::parse("warning!: Maintenance tonight");
        assert_eq!(
            spec,
            AlertSpec::new(NotificationKind::Warning, "Maintenance tonight").without_close()
        );
    }

    #[test]
    fn bang_after_unknown_kind_is_plain_text() {
        let spec = AlertSpec::parse("hey!: listen");
        assert_eq!(spec.kind, NotificationKind::Info);
        assert_eq!(spec.message, "hey!: listen");
        assert!(spec.closable);
    }
}
