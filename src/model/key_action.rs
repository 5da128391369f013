//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that key bindings resolve to.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`,
/// and whether an action applies in the current focus context is decided by
/// `ShortcutRouter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Form shortcuts
    /// Activate the submit control. Default: Enter
    SubmitForm,
    /// Reset both fields and clear error markings. Default: Esc
    ClearForm,
    /// Move focus to the username field. Default: Ctrl+k / Super+k
    FocusUsername,

    // Tab navigation
    /// Move focus to the next control. Default: Tab
    FocusNext,
    /// Move focus to the previous control. Default: Shift+Tab
    FocusPrev,

    // Password field
    /// Show or hide the password. Default: Ctrl+t
    ToggleVisibility,

    // Alerts and toasts
    /// Select the next alert. Default: Alt+↓
    NextAlert,
    /// Select the previous alert. Default: Alt+↑
    PrevAlert,
    /// Close the selected alert. Default: Ctrl+w
    DismissAlert,
    /// Close the newest toast. Default: Ctrl+x
    DismissToast,

    // Application
    /// Abandon the form without submitting. Default: Ctrl+c
    Quit,
}
