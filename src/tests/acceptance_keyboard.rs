//! Acceptance tests for keyboard shortcuts and the focus trap.

use crate::model::Field;
use crate::state::{ClearPhase, FocusTarget, FormConfig, FormFields};
use crate::test_harness::LoginHarness;
use crate::view::Outcome;
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn escape_clears_fields_and_errors_with_fade() {
    let mut harness = LoginHarness::new();
    harness.type_text("al");
    harness.press(KeyCode::Enter);
    assert_eq!(harness.state().errors().message_count(), 2);

    harness.press(KeyCode::Esc);
    assert!(harness.state().errors().is_clear());
    assert!(harness.state().form().input(Field::Username).is_empty());
    assert_eq!(
        harness.state().form().clear_phase(),
        Some(ClearPhase::FadingOut)
    );

    harness.advance(300);
    assert_eq!(
        harness.state().form().clear_phase(),
        Some(ClearPhase::FadingIn)
    );
    harness.advance(300);
    assert_eq!(harness.state().form().clear_phase(), None);

    let screen = harness.render_to_string();
    assert!(!screen.contains("Please enter"));
}

#[test]
fn tab_cycles_through_card_controls_and_wraps() {
    let mut harness = LoginHarness::new();
    let mut seen = vec![harness.state().focused()];
    for _ in 0..4 {
        harness.press(KeyCode::Tab);
        seen.push(harness.state().focused());
    }

    assert_eq!(
        seen,
        vec![
            Some(FocusTarget::Username),
            Some(FocusTarget::Password),
            Some(FocusTarget::VisibilityToggle),
            Some(FocusTarget::Submit),
            Some(FocusTarget::Username),
        ]
    );
}

#[test]
fn shift_tab_from_first_control_wraps_to_last() {
    let mut harness = LoginHarness::new();
    harness.press_with_mods(KeyCode::BackTab, KeyModifiers::SHIFT);
    assert_eq!(harness.state().focused(), Some(FocusTarget::Submit));
}

#[test]
fn trap_skips_missing_toggle() {
    let config = FormConfig {
        show_visibility_toggle: false,
        ..FormConfig::default()
    };
    let mut harness = LoginHarness::with_setup(config, FormFields::new(), Vec::new());
    harness.press(KeyCode::Tab);
    harness.press(KeyCode::Tab);
    assert_eq!(harness.state().focused(), Some(FocusTarget::Submit));

    // Ctrl+T does nothing without the control.
    harness.press_with_mods(KeyCode::Char('t'), KeyModifiers::CONTROL);
    assert!(!harness.state().form().password_visible());
}

#[test]
fn ctrl_k_and_super_k_focus_username() {
    let mut harness = LoginHarness::new();
    for mods in [KeyModifiers::CONTROL, KeyModifiers::SUPER] {
        harness.state_mut().focus_on(FocusTarget::Submit);
        harness.press_with_mods(KeyCode::Char('k'), mods);
        assert_eq!(harness.state().focused(), Some(FocusTarget::Username));
    }
    assert!(
        harness.state().form().input(Field::Username).is_empty(),
        "shortcut is not typed into the field"
    );
}

#[test]
fn visibility_toggle_reveals_password() {
    let mut harness = LoginHarness::new();
    harness.press(KeyCode::Tab);
    harness.type_text("hunter22");
    assert!(!harness.render_to_string().contains("hunter22"));

    harness.press_with_mods(KeyCode::Char('t'), KeyModifiers::CONTROL);
    let screen = harness.render_to_string();
    assert!(screen.contains("hunter22"));
    assert!(screen.contains("Hide password"));
    assert_eq!(harness.state().focused(), Some(FocusTarget::Password));
}

#[test]
fn ctrl_c_cancels_the_form() {
    let mut harness = LoginHarness::new();
    harness.type_text("alice");
    harness.press_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(harness.outcome(), Some(&Outcome::Cancelled));
}
