//! Shared utilities for the parley TUI.
//!
//! - **[constants]**: Spacing, padding, and sizing constants.
//! - **[layout]**: Rect padding.
//! - **[format]**: Duration, truncation and word wrapping.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{format_duration, truncate_ellipsis, wrap_lines};
pub use layout::{centered, horizontal_padding, horizontal_padding_with};
