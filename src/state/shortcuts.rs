//! Keyboard shortcut routing.
//!
//! Resolves a key event to at most one [`FormAction`], taking the current
//! focus into account. The router is owned by the app and lives exactly as
//! long as the form it serves.

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::focus::{FocusTarget, TabDirection};
use crossterm::event::KeyEvent;

/// What a key event asks the form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Activate the submit control.
    Submit,
    /// Reset fields and clear errors.
    ClearForm,
    /// Move focus to the username field.
    FocusUsername,
    /// Tab navigation.
    Navigate(TabDirection),
    /// Show or hide the password.
    ToggleVisibility,
    /// Select an alert (outside the trap).
    SelectAlert(TabDirection),
    /// Close the selected alert.
    DismissAlert,
    /// Close the newest toast.
    DismissToast,
    /// Abandon the form.
    Quit,
}

/// Maps key events to form actions.
///
/// # Priority
///
/// Evaluated in this order, first match wins:
///
/// 1. Submit key while an input field has focus → [`FormAction::Submit`]
/// 2. Clear key, whatever has focus → [`FormAction::ClearForm`]
/// 3. Jump combination → [`FormAction::FocusUsername`]
///
/// Each key binds to exactly one [`KeyAction`], so only one of these can
/// match a given event. Remaining bindings (tab navigation, visibility,
/// alerts, quit) follow.
///
/// The submit key on a focused button activates that button, which mirrors
/// native button behaviour. Submission is routed regardless of the submit
/// state; the state machine guards re-entrancy.
#[derive(Debug, Clone, Default)]
pub struct ShortcutRouter {
    bindings: KeyBindings,
}

impl ShortcutRouter {
    /// Router over the given bindings.
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// Bindings this router consults.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Resolve `key` given the currently focused control.
    ///
    /// Returns `None` when the key is not a shortcut in this context; the
    /// caller then treats it as text input.
    pub fn route(&self, key: KeyEvent, focused: Option<FocusTarget>) -> Option<FormAction> {
        let action = self.bindings.get(key)?;

        match action {
            KeyAction::SubmitForm => match focused {
                Some(target) if target.is_input() => Some(FormAction::Submit),
                Some(FocusTarget::Submit) => Some(FormAction::Submit),
                Some(FocusTarget::VisibilityToggle) => Some(FormAction::ToggleVisibility),
                _ => None,
            },
            KeyAction::ClearForm => Some(FormAction::ClearForm),
            KeyAction::FocusUsername => Some(FormAction::FocusUsername),
            KeyAction::FocusNext => Some(FormAction::Navigate(TabDirection::Forward)),
            KeyAction::FocusPrev => Some(FormAction::Navigate(TabDirection::Backward)),
            KeyAction::ToggleVisibility => Some(FormAction::ToggleVisibility),
            KeyAction::NextAlert => Some(FormAction::SelectAlert(TabDirection::Forward)),
            KeyAction::PrevAlert => Some(FormAction::SelectAlert(TabDirection::Backward)),
            KeyAction::DismissAlert => Some(FormAction::DismissAlert),
            KeyAction::DismissToast => Some(FormAction::DismissToast),
            KeyAction::Quit => Some(FormAction::Quit),
        }
    }
}
