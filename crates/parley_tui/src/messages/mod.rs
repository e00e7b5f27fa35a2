//! Message rendering for the TUI. Uses crate::theme for colors.
//!
//! - **chat**: user and assistant messages as prose and code views.
//! - **markdown**: prose blocks and inline styling.
//! - **error**: inline runtime errors.

pub mod chat;
pub mod error;
pub mod markdown;
