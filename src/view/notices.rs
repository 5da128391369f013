//! Alert strip and toast stack.

use super::constants::{TOAST_HEIGHT, TOAST_WIDTH};
use super::styles::FormStyles;
use crate::state::{Alert, AlertId, AlertPhase, Toast, ToastPhase};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Close marker shown on alerts that can be dismissed by hand.
const CLOSE_MARKER: &str = " [x]";

/// One row per alert, above the login card.
#[derive(Debug, Clone, Copy)]
pub struct AlertStrip<'a> {
    alerts: &'a [Alert],
    selected: Option<AlertId>,
    styles: &'a FormStyles,
}

impl<'a> AlertStrip<'a> {
    /// Strip over `alerts`, highlighting `selected`.
    pub fn new(alerts: &'a [Alert], selected: Option<AlertId>, styles: &'a FormStyles) -> Self {
        Self {
            alerts,
            selected,
            styles,
        }
    }

    fn line(&self, alert: &Alert) -> Line<'a> {
        let mut style = self.styles.kind(alert.kind());
        if alert.phase() == AlertPhase::Exiting {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.selected == Some(alert.id()) {
            style = style.patch(self.styles.selection());
        }

        let mut spans = vec![
            Span::styled(format!("{} ", alert.kind().icon()), style),
            Span::styled(alert.message().to_string(), style),
        ];
        if alert.closable() {
            spans.push(Span::styled(CLOSE_MARKER, self.styles.muted()));
        }
        Line::from(spans)
    }
}

impl Widget for AlertStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self.alerts.iter().map(|a| self.line(a)).collect();
        Paragraph::new(lines).render(area, buf);
    }
}

/// Rectangle of the `index`-th toast, stacked down from the top-right
/// corner. `None` once the stack runs off the bottom of `area`.
pub fn toast_area(area: Rect, index: usize) -> Option<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let offset = u16::try_from(index).ok()?.checked_mul(TOAST_HEIGHT)?;
    let y = area.y.checked_add(offset)?;
    if y.saturating_add(TOAST_HEIGHT) > area.bottom() {
        return None;
    }
    Some(Rect {
        x: area.right().saturating_sub(width),
        y,
        width,
        height: TOAST_HEIGHT,
    })
}

/// Render every toast that is not still waiting to enter.
pub fn render_toasts(toasts: &[Toast], styles: &FormStyles, area: Rect, buf: &mut Buffer) {
    let visible = toasts.iter().filter(|t| t.phase() != ToastPhase::Entering);

    for (index, toast) in visible.enumerate() {
        let Some(rect) = toast_area(area, index) else {
            break;
        };

        let mut style = styles.kind(toast.kind());
        if toast.phase() == ToastPhase::Leaving {
            style = style.add_modifier(Modifier::DIM);
        }

        Clear.render(rect, buf);
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", toast.kind().icon()), style),
            Span::raw(toast.message().to_string()),
        ]))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(style))
        .render(rect, buf);
    }
}
