//! Editable field buffers.

use crate::model::{Credentials, Field};

/// Single-line text buffer with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in characters, `0..=value.chars().count()`.
    cursor: usize,
}

impl TextInput {
    /// Buffer holding `value` with the cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Current contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Insert `ch` at the cursor.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if anything changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor. Returns true if anything changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// Phase of the clear-form animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearPhase {
    /// Fields fading out; values are emptied when this ends.
    FadingOut,
    /// Empty fields fading back in.
    FadingIn,
}

/// The two field buffers plus password visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    username: TextInput,
    password: TextInput,
    password_visible: bool,
    clear_phase: Option<ClearPhase>,
}

impl FormFields {
    /// Empty fields, password masked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the username.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = TextInput::with_value(username);
        self
    }

    /// Buffer of `field`.
    pub fn input(&self, field: Field) -> &TextInput {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }

    /// Mutable buffer of `field`.
    pub fn input_mut(&mut self, field: Field) -> &mut TextInput {
        match field {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }

    /// Fresh credential pair from the current buffers.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.value(), self.password.value())
    }

    /// Whether the password is shown in plain text.
    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// Flip password visibility. Returns the new visibility.
    pub fn toggle_password_visibility(&mut self) -> bool {
        self.password_visible = !self.password_visible;
        self.password_visible
    }

    /// Empty both buffers. Visibility is left as is.
    pub fn reset(&mut self) {
        self.username.clear();
        self.password.clear();
    }

    /// Current clear-form animation phase.
    pub fn clear_phase(&self) -> Option<ClearPhase> {
        self.clear_phase
    }

    /// Set the clear-form animation phase.
    pub fn set_clear_phase(&mut self, phase: Option<ClearPhase>) {
        self.clear_phase = phase;
    }

    /// Floating-label rule: a label is raised while its field is focused
    /// or holds text.
    pub fn label_raised(&self, field: Field, focused: bool) -> bool {
        focused || !self.input(field).is_empty()
    }
}
