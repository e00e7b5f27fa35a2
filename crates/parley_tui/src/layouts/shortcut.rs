//! Shortcut hint line below the input, depending on what owns the keyboard.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::input::INPUT_PADDING_H;
use super::style::text_muted_style;
use crate::theme::Palette;

/// Horizontal inset so the hint aligns with the input content (border + padding).
const SHORTCUT_INSET_H: u16 = 1 + INPUT_PADDING_H;

/// What the footer hint describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutMode {
    /// Waiting for a reply or revealing it.
    Busy,
    /// A code view has focus.
    Editing,
    Typing,
    Idle,
}

pub fn shortcut_inner_rect(area: Rect) -> Rect {
    let inset = SHORTCUT_INSET_H;
    Rect {
        x: area.x.saturating_add(inset),
        y: area.y,
        width: area.width.saturating_sub(inset.saturating_mul(2)),
        height: area.height,
    }
}

pub fn shortcut_line(palette: &Palette, mode: ShortcutMode) -> Line<'static> {
    let hint = match mode {
        ShortcutMode::Busy => "Waiting for reply…  ·  PgUp/PgDn: scroll  ·  Ctrl+C: quit",
        ShortcutMode::Editing => "Editing code  ·  Tab: next  ·  Ctrl+Y: copy  ·  Esc: done",
        ShortcutMode::Typing => "Enter: send  ·  Ctrl+U: clear  ·  Ctrl+C: quit",
        ShortcutMode::Idle => "PgUp/PgDn: scroll  ·  Tab: edit code  ·  Ctrl+D: logs  ·  q: quit",
    };
    Line::from(vec![Span::styled(hint.to_string(), text_muted_style(palette.text_muted))])
}
