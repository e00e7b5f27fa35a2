//! Code-view colors (monokai).
//!
//! Defined as (R, G, B) tuples for use with any terminal color library.

/// Editor background: #272822
pub const BACKGROUND: (u8, u8, u8) = (39, 40, 34);
/// Plain code text: #f8f8f2
pub const FOREGROUND: (u8, u8, u8) = (248, 248, 242);
/// Gutter line numbers: #90908a
pub const GUTTER: (u8, u8, u8) = (144, 144, 138);
/// Current line in a focused editor: #3e3d32
pub const LINE_HIGHLIGHT: (u8, u8, u8) = (62, 61, 50);
/// Keywords: #f92672
pub const KEYWORD: (u8, u8, u8) = (249, 38, 114);
/// String literals: #e6db74
pub const STRING: (u8, u8, u8) = (230, 219, 116);
/// Numbers and constants: #ae81ff
pub const NUMBER: (u8, u8, u8) = (174, 129, 255);
/// Comments: #75715e
pub const COMMENT: (u8, u8, u8) = (117, 113, 94);
/// Object keys and function names: #a6e22e
pub const NAME: (u8, u8, u8) = (166, 226, 46);
/// Cursor block: #f8f8f0
pub const CURSOR: (u8, u8, u8) = (248, 248, 240);
