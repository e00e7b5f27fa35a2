//! Input bar block.

use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::style::{background_style, border_style};
use crate::theme::Palette;

/// Horizontal padding inside the input block (each side).
pub const INPUT_PADDING_H: u16 = 2;

/// Icon shown at the start of the input line.
pub const INPUT_ICON: &str = "▸ ";

/// Input block with a rounded border. Uses the focused border color while the
/// input owns the keyboard (no code view focused).
pub fn block_for_input(palette: &Palette, focused: bool) -> Block<'static> {
    let border = if focused {
        palette.border_focused
    } else {
        palette.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(border))
        .style(background_style(palette.status_bar_background))
        .padding(Padding::new(INPUT_PADDING_H, INPUT_PADDING_H, 0, 0))
}
