//! Map theme palette to ratatui styles.
//!
//! All colors come from [Palette](crate::theme::Palette); use these helpers so
//! chrome and text stay consistent with the theme.

use ratatui::style::{Color, Style};

use crate::theme::Rgb;

#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

pub fn border_style(border_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_rgb))
}

pub fn background_style(bg_rgb: Rgb) -> Style {
    Style::default().bg(rgb_to_color(bg_rgb))
}

pub fn text_style(text_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_rgb))
}

pub fn text_muted_style(text_muted_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_muted_rgb))
}

pub fn danger_style(danger_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(danger_rgb))
}

/// Foreground on a background, for code view cells.
pub fn code_style(fg: Rgb, bg: Rgb) -> Style {
    Style::default().fg(rgb_to_color(fg)).bg(rgb_to_color(bg))
}
