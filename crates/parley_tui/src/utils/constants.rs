//! TUI spacing and sizing constants.

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Left indent for continuation lines (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Blank lines between message blocks.
pub const MESSAGE_SPACING_LINES: usize = 1;

/// Most code lines a code view shows at once; longer code scrolls inside the view.
pub const CODE_VIEW_MAX_LINES: usize = 12;

/// Trace lines kept for the debug screen (older lines dropped).
pub const MAX_TRACE_LINES: usize = 2000;
