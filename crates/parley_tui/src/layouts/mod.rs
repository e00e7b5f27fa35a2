//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]**: header, body and footer regions.
//! - **[style]**: palette [Rgb](crate::theme::Rgb) to ratatui [Style](ratatui::style::Style).
//! - **[head]**: branding header with status.
//! - **[input]**: input bar block.
//! - **[shortcut]**: hint line below the input.

mod head;
mod input;
mod shortcut;
mod split;
mod style;

pub use head::{header_height, header_lines, render_header, HeaderState, HEADER_STATUS_READY};
pub use input::{block_for_input, INPUT_ICON, INPUT_PADDING_H};
pub use shortcut::{shortcut_inner_rect, shortcut_line, ShortcutMode};
pub use split::{main_splits, vertical_split, MainSplits, FOOTER_HEIGHT};
pub use style::{
    background_style, border_style, code_style, danger_style, rgb_to_color, text_muted_style,
    text_style,
};
