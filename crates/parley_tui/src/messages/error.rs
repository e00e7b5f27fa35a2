//! Inline error rendering (✗ icon, danger style).

use ratatui::text::{Line, Span};

use crate::layouts::danger_style;
use crate::theme::Palette;
use crate::utils::{wrap_lines, LEFT_PADDING};

/// Error shown in the chat (from `SessionEvent::Error`). Not part of the conversation.
#[derive(Debug, Clone)]
pub struct ErrorMessage {
    pub text: String,
    pub timestamp: Option<String>,
}

pub fn error_message_lines(msg: &ErrorMessage, palette: &Palette, width: usize) -> Vec<Line<'static>> {
    let style = danger_style(palette.danger);
    let wrap_width = width.saturating_sub(LEFT_PADDING.len()).max(1);
    let wrapped = wrap_lines(msg.text.trim(), wrap_width);

    let mut first = vec![Span::styled("✗ ", style)];
    if let Some(t) = &msg.timestamp {
        first.push(Span::styled(format!("{} ", t), style));
    }
    let mut rest = wrapped.into_iter();
    if let Some(head) = rest.next() {
        first.push(Span::styled(head, style));
    }

    let mut lines = vec![Line::from(first)];
    lines.extend(rest.map(|seg| Line::from(vec![Span::raw(LEFT_PADDING), Span::styled(seg, style)])));
    lines
}
