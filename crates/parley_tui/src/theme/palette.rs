//! Parley palette: semantic color roles for chrome, chat text and code views.
//!
//! Chrome and text colors follow the appearance. Code views always use the
//! monokai colors from [parley_constant::code_theme], in both appearances.

use parley_constant::code_theme;

use super::Appearance;
use super::rgb::Rgb;

/// Colors used inside code views.
#[derive(Clone, Debug, PartialEq)]
pub struct CodePalette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub gutter: Rgb,
    pub line_highlight: Rgb,
    pub keyword: Rgb,
    pub string: Rgb,
    pub number: Rgb,
    pub comment: Rgb,
    pub name: Rgb,
    pub cursor: Rgb,
}

impl CodePalette {
    pub fn monokai() -> Self {
        Self {
            background: code_theme::BACKGROUND.into(),
            foreground: code_theme::FOREGROUND.into(),
            gutter: code_theme::GUTTER.into(),
            line_highlight: code_theme::LINE_HIGHLIGHT.into(),
            keyword: code_theme::KEYWORD.into(),
            string: code_theme::STRING.into(),
            number: code_theme::NUMBER.into(),
            comment: code_theme::COMMENT.into(),
            name: code_theme::NAME.into(),
            cursor: code_theme::CURSOR.into(),
        }
    }
}

/// One full palette for an appearance (dark or light).
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    // --- Surfaces
    pub background: Rgb,
    /// Header and input bar.
    pub status_bar_background: Rgb,
    /// Inline `code` spans in prose.
    pub element_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_placeholder: Rgb,
    pub text_disabled: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,

    // --- Scrollbar
    pub scrollbar_thumb_background: Rgb,
    pub scrollbar_track_background: Rgb,

    pub code: CodePalette,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Rgb(8, 8, 12),
            status_bar_background: Rgb(16, 17, 24),
            element_background: Rgb(26, 27, 38),
            border: Rgb(28, 30, 42),
            border_focused: Rgb(99, 148, 255),
            text: Rgb(200, 210, 245),
            text_muted: Rgb(70, 78, 110),
            text_placeholder: Rgb(70, 78, 110),
            text_disabled: Rgb(61, 65, 102),
            accent: Rgb(99, 148, 255),
            danger: Rgb(255, 100, 120),
            success: Rgb(120, 220, 120),
            warning: Rgb(240, 185, 100),
            scrollbar_thumb_background: Rgb(86, 95, 137),
            scrollbar_track_background: Rgb(17, 17, 26),
            code: CodePalette::monokai(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            status_bar_background: Rgb(248, 248, 248),
            element_background: Rgb(244, 244, 245),
            border: Rgb(229, 229, 229),
            border_focused: Rgb(122, 162, 247),
            text: Rgb(26, 27, 38),
            text_muted: Rgb(86, 95, 137),
            text_placeholder: Rgb(86, 95, 137),
            text_disabled: Rgb(161, 161, 170),
            accent: Rgb(122, 162, 247),
            danger: Rgb(247, 118, 142),
            success: Rgb(158, 206, 106),
            warning: Rgb(224, 175, 104),
            scrollbar_thumb_background: Rgb(161, 161, 170),
            scrollbar_track_background: Rgb(248, 248, 248),
            code: CodePalette::monokai(),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }
}
