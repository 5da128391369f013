//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Lookups ignore the event kind and state so that a press reported with
/// extra metadata (Windows, kitty protocol) still matches its binding.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Add or replace a binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings
            .insert(KeyEvent::new(key.code, key.modifiers), action);
    }

    /// All keys bound to `action`, in no particular order.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        self.bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Form shortcuts
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::SubmitForm,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::ClearForm,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL),
            KeyAction::FocusUsername,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER),
            KeyAction::FocusUsername,
        );

        // Tab navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::FocusNext,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::FocusPrev,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            KeyAction::FocusPrev,
        );

        // Password field
        bindings.insert(
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
            KeyAction::ToggleVisibility,
        );

        // Alerts and toasts
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::ALT),
            KeyAction::NextAlert,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::ALT),
            KeyAction::PrevAlert,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL),
            KeyAction::DismissAlert,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            KeyAction::DismissToast,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
