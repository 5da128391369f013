//! The login card: inputs, error lines, visibility toggle, submit button
//! and footer, with the alert strip above it and toasts on top.

use super::constants::{
    ALERT_HEIGHT, BUTTON_HEIGHT, CARD_WIDTH, ERROR_LINE_HEIGHT, FOOTER_HEIGHT, HINTS_HEIGHT,
    INPUT_HEIGHT, SHAKE_OFFSET, TOGGLE_HEIGHT,
};
use super::notices::{render_toasts, AlertStrip};
use super::styles::FormStyles;
use super::submit_button::SubmitButton;
use crate::model::Field;
use crate::state::{FocusTarget, LoginState};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Mask character for hidden passwords.
const MASK_CHAR: char = '•';

/// Key hints at the bottom of the card, one entry per line.
const HINTS: [&str; HINTS_HEIGHT as usize] = [
    "Enter sign in · Esc clear · Ctrl+C quit",
    "Ctrl+K username · Ctrl+T show password",
    "Alt+↑↓ alerts · Ctrl+W close · Ctrl+X toast",
];

/// Height of the card including its border.
pub fn card_height(show_visibility_toggle: bool) -> u16 {
    let toggle = if show_visibility_toggle { TOGGLE_HEIGHT } else { 0 };
    2 * (INPUT_HEIGHT + ERROR_LINE_HEIGHT)
        + toggle
        + BUTTON_HEIGHT
        + FOOTER_HEIGHT
        + HINTS_HEIGHT
        + 2
}

/// Split `area` into the alert strip and the card, centered together.
pub fn screen_areas(area: Rect, alert_count: usize, show_visibility_toggle: bool) -> (Rect, Rect) {
    let alerts_height = u16::try_from(alert_count)
        .unwrap_or(u16::MAX)
        .saturating_mul(ALERT_HEIGHT);
    let card = card_height(show_visibility_toggle);

    let width = CARD_WIDTH.min(area.width);
    let height = alerts_height.saturating_add(card).min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;

    let alerts_height = alerts_height.min(height);
    let alerts = Rect::new(x, y, width, alerts_height);
    let card = Rect::new(x, y + alerts_height, width, height - alerts_height);
    (alerts, card)
}

/// Slice of `text` that fits `width` columns with the cursor in view.
///
/// Returns the visible text and the cursor column within it.
pub fn visible_window(text: &str, cursor: usize, width: u16) -> (String, u16) {
    let width = usize::from(width);
    if width == 0 {
        return (String::new(), 0);
    }

    let chars: Vec<(char, usize)> = text
        .chars()
        .map(|c| (c, c.width().unwrap_or(0)))
        .collect();
    let cursor = cursor.min(chars.len());

    // Scroll so that the text before the cursor plus the cursor cell fits.
    let mut start = 0;
    let mut before: usize = chars[..cursor].iter().map(|(_, w)| w).sum();
    while before + 1 > width && start < cursor {
        before -= chars[start].1;
        start += 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for (c, w) in &chars[start..] {
        if used + w > width {
            break;
        }
        visible.push(*c);
        used += w;
    }

    (visible, u16::try_from(before).unwrap_or(u16::MAX))
}

/// Render the whole login screen.
pub fn render_login_screen(frame: &mut Frame, state: &LoginState, styles: &FormStyles, year: i32) {
    let area = frame.area();
    let (alerts_area, card_area) =
        screen_areas(area, state.alerts().len(), state.has_visibility_toggle());

    frame.render_widget(
        AlertStrip::new(state.alerts().alerts(), state.selected_alert(), styles),
        alerts_area,
    );

    render_card(frame, state, styles, year, card_area);

    render_toasts(state.toasts().toasts(), styles, area, frame.buffer_mut());
}

fn render_card(frame: &mut Frame, state: &LoginState, styles: &FormStyles, year: i32, area: Rect) {
    let block = Block::default()
        .title(" Sign in ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(styles.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let toggle_height = if state.has_visibility_toggle() {
        TOGGLE_HEIGHT
    } else {
        0
    };
    let [username, username_error, password, password_error, toggle, button, footer, hints] =
        Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(ERROR_LINE_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(ERROR_LINE_HEIGHT),
            Constraint::Length(toggle_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(HINTS_HEIGHT),
        ])
        .areas(inner);

    render_input(frame, state, styles, Field::Username, username);
    render_error_line(frame, state, styles, Field::Username, username_error);
    render_input(frame, state, styles, Field::Password, password);
    render_error_line(frame, state, styles, Field::Password, password_error);

    if state.has_visibility_toggle() {
        let label = if state.form().password_visible() {
            "[ Hide password ]"
        } else {
            "[ Show password ]"
        };
        let style = if state.focused() == Some(FocusTarget::VisibilityToggle) {
            styles.selection()
        } else {
            styles.muted()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(label, style)).alignment(Alignment::Right),
            toggle,
        );
    }

    frame.render_widget(
        SubmitButton::new(state.submit_state(), styles)
            .focused(state.focused() == Some(FocusTarget::Submit)),
        button,
    );

    frame.render_widget(
        Paragraph::new(format!("© {year} termlogin"))
            .style(styles.muted())
            .alignment(Alignment::Center),
        footer,
    );
    frame.render_widget(
        Paragraph::new(HINTS.map(Line::from).to_vec())
            .style(styles.muted())
            .alignment(Alignment::Center),
        hints,
    );
}

fn render_input(
    frame: &mut Frame,
    state: &LoginState,
    styles: &FormStyles,
    field: Field,
    area: Rect,
) {
    let focused = state.focused() == Some(FocusTarget::from(field));
    let errored = state.errors().is_errored(field);
    let input = state.form().input(field);

    let area = if state.is_shaking(field) {
        Rect {
            x: area.x + SHAKE_OFFSET,
            width: area.width.saturating_sub(SHAKE_OFFSET),
            ..area
        }
    } else {
        area
    };

    let border_style = if errored {
        styles.error()
    } else if focused {
        styles.focused_border()
    } else {
        styles.border()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let raised = state.form().label_raised(field, focused);
    if raised {
        let label_style = if errored {
            styles.error()
        } else {
            styles.raised_label()
        };
        block = block.title(Span::styled(format!(" {} ", field.label()), label_style));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !raised {
        frame.render_widget(Paragraph::new(field.label()).style(styles.muted()), inner);
        return;
    }

    let shown: String = match field {
        Field::Password if !state.form().password_visible() => {
            input.value().chars().map(|_| MASK_CHAR).collect()
        }
        _ => input.value().to_string(),
    };
    let (visible, cursor_x) = visible_window(&shown, input.cursor(), inner.width);

    let text_style = if state.form().clear_phase().is_some() {
        styles.fading()
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new(Line::styled(visible, text_style)), inner);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(
            inner.x + cursor_x.min(inner.width - 1),
            inner.y,
        ));
    }
}

fn render_error_line(
    frame: &mut Frame,
    state: &LoginState,
    styles: &FormStyles,
    field: Field,
    area: Rect,
) {
    if let Some(message) = state.errors().message_for(field) {
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {message}"), styles.error())),
            area,
        );
    }
}
