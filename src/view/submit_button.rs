//! Submit button rendering.
//!
//! The mapping from submit state to what the button shows is a pure
//! function, kept apart from the widget so the state machine stays
//! presentation-free.

use super::styles::FormStyles;
use crate::state::SubmitState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Label of the idle button.
pub const SUBMIT_LABEL: &str = "Sign in";

/// Label of the busy button.
pub const BUSY_LABEL: &str = "Signing in...";

/// What the button face shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonContent {
    /// Idle label.
    Label,
    /// Busy indicator.
    Busy,
}

impl ButtonContent {
    /// Text for this content.
    pub fn text(self) -> &'static str {
        match self {
            ButtonContent::Label => SUBMIT_LABEL,
            ButtonContent::Busy => BUSY_LABEL,
        }
    }
}

/// Presentation of the submit control for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButtonView {
    /// Face content.
    pub content: ButtonContent,
    /// Whether activation is accepted.
    pub enabled: bool,
}

/// Map a submit state to its button presentation.
pub fn button_view(state: SubmitState) -> SubmitButtonView {
    match state {
        SubmitState::Idle => SubmitButtonView {
            content: ButtonContent::Label,
            enabled: true,
        },
        SubmitState::Submitting => SubmitButtonView {
            content: ButtonContent::Busy,
            enabled: false,
        },
    }
}

/// Submit button widget.
#[derive(Debug, Clone, Copy)]
pub struct SubmitButton<'a> {
    view: SubmitButtonView,
    focused: bool,
    styles: &'a FormStyles,
}

impl<'a> SubmitButton<'a> {
    /// Button for `state`.
    pub fn new(state: SubmitState, styles: &'a FormStyles) -> Self {
        Self {
            view: button_view(state),
            focused: false,
            styles,
        }
    }

    /// Mark the button as focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SubmitButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut style = if self.view.enabled {
            self.styles.button()
        } else {
            self.styles.button_disabled()
        };
        if self.focused {
            style = style.patch(self.styles.selection());
        }

        let border_style = if self.focused {
            self.styles.focused_border()
        } else {
            self.styles.border()
        };

        Paragraph::new(self.view.content.text())
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}
