//! Parley theme: semantic color palette for the TUI.
//!
//! # Example
//!
//! ```
//! use parley_tui::theme::{Appearance, Palette};
//!
//! let palette = Palette::for_appearance(Appearance::Light);
//! let (r, g, b) = palette.text.tuple();
//! # let _ = (r, g, b);
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::{CodePalette, Palette};
pub use rgb::Rgb;
