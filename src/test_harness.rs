//! Acceptance Test Harness for TUI testing
//!
//! Wraps `LoginApp<TestBackend>` with a manual clock so tests can press
//! keys, advance time and inspect the rendered screen deterministically.

use crate::model::AlertSpec;
use crate::state::{FormConfig, FormFields, LoginState, ShortcutRouter};
use crate::view::{FormStyles, LoginApp, Outcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Every interaction happens at the harness clock, which only moves when
/// [`advance`](Self::advance) is called.
pub(crate) struct LoginHarness {
    app: LoginApp<TestBackend>,
    now: Instant,
    outcome: Option<Outcome>,
}

#[allow(dead_code)] // Not every helper is used by every test module
impl LoginHarness {
    /// Default form on an 80x30 screen.
    pub fn new() -> Self {
        Self::with_setup(FormConfig::default(), FormFields::new(), Vec::new())
    }

    /// Form with startup alerts.
    pub fn with_alerts(alerts: Vec<AlertSpec>) -> Self {
        Self::with_setup(FormConfig::default(), FormFields::new(), alerts)
    }

    /// Fully specified form.
    pub fn with_setup(config: FormConfig, fields: FormFields, alerts: Vec<AlertSpec>) -> Self {
        let now = Instant::now();
        let terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
        let state = LoginState::new(config, fields, alerts, now);
        let app = LoginApp::with_terminal(
            terminal,
            state,
            ShortcutRouter::default(),
            FormStyles::default(),
            2026,
        );
        Self {
            app,
            now,
            outcome: None,
        }
    }

    /// Press a key without modifiers.
    pub fn press(&mut self, code: KeyCode) {
        self.press_with_mods(code, KeyModifiers::NONE);
    }

    /// Press a key with modifiers. The first outcome is kept.
    pub fn press_with_mods(&mut self, code: KeyCode, mods: KeyModifiers) {
        let outcome = self.app.handle_key(KeyEvent::new(code, mods), self.now);
        if self.outcome.is_none() {
            self.outcome = outcome;
        }
    }

    /// Type each character of `text`.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    /// Move the clock forward and fire whatever fell due.
    pub fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        self.app.tick(self.now);
    }

    /// Current harness time.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Form state.
    pub fn state(&self) -> &LoginState {
        self.app.state()
    }

    /// Mutable form state.
    pub fn state_mut(&mut self) -> &mut LoginState {
        self.app.state_mut()
    }

    /// First outcome reported by the app, if any.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Render and return the screen as text.
    pub fn render_to_string(&mut self) -> String {
        self.app.draw().expect("render to test backend");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
