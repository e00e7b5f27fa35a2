//! parley-tui: terminal chat UI for parley.
//!
//! Theming in [theme]; layout in [layouts]; messages in [messages]; editable code
//! blocks in [code_view]; state and view in [state] and [view].
//! Run with [run_tui_with_runtime].

pub mod branding;
pub mod code_view;
pub mod layouts;
pub mod messages;
pub mod reveal;
pub mod run;
pub mod runtime_events;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use branding::Branding;
pub use run::run_tui_with_runtime;
pub use state::{ChatItem, Screen, TuiState};
pub use theme::{Appearance, Palette};
pub use view::draw as draw_view;
