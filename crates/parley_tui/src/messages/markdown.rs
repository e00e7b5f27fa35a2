//! Prose formatting for text segments: inline (**bold**, `code`) and blocks
//! (# Header, - list, 1. list, ---). Fenced code never reaches here; it is
//! split out into code views first.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::layouts::{rgb_to_color, text_muted_style, text_style};
use crate::theme::Palette;
use crate::utils::{wrap_lines, LEFT_PADDING};

/// Parse a single line for inline markdown: **bold** and `code`. Unclosed markers render literally.
pub fn parse_inline_markdown(line: &str, palette: &Palette) -> Vec<Span<'static>> {
    let normal = text_style(palette.text);
    let bold = text_style(palette.text).add_modifier(Modifier::BOLD);
    let code_style = Style::default()
        .fg(rgb_to_color(palette.accent))
        .bg(rgb_to_color(palette.element_background));

    let mut spans = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let tick = rest.find('`');
        let stars = rest.find("**");
        let (at, marker, style) = match (tick, stars) {
            (None, None) => {
                spans.push(Span::styled(rest.to_string(), normal));
                break;
            }
            (Some(t), Some(b)) if b < t => (b, "**", bold),
            (Some(t), _) => (t, "`", code_style),
            (None, Some(b)) => (b, "**", bold),
        };
        if at > 0 {
            spans.push(Span::styled(rest[..at].to_string(), normal));
        }
        let after = &rest[at + marker.len()..];
        match after.find(marker) {
            Some(end) => {
                spans.push(Span::styled(after[..end].to_string(), style));
                rest = &after[end + marker.len()..];
            }
            None => {
                spans.push(Span::styled(rest[at..].to_string(), normal));
                break;
            }
        }
    }
    if spans.is_empty() {
        spans.push(Span::styled(line.to_string(), normal));
    }
    spans
}

pub fn has_inline_markdown(line: &str) -> bool {
    line.contains('`') || line.contains("**")
}

/// Block-level prose element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    Header(String),
    /// Bullet text with its marker ("•" or "3.").
    ListItem { marker: String, text: String },
    HorizontalRule,
}

/// Marker and text of an ordered list item like "2. text".
fn ordered_item(trimmed: &str) -> Option<(&str, &str)> {
    let dot = trimmed.find(". ")?;
    let number = &trimmed[..dot];
    (!number.is_empty() && number.len() <= 3 && number.bytes().all(|b| b.is_ascii_digit()))
        .then(|| (&trimmed[..dot + 1], trimmed[dot + 2..].trim()))
}

/// Parse prose into blocks (headers, list items, rules, paragraphs).
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    let flush = |acc: &mut Vec<&str>, out: &mut Vec<Block>| {
        if !acc.is_empty() {
            let s = acc.join("\n").trim().to_string();
            if !s.is_empty() {
                out.push(Block::Paragraph(s));
            }
            acc.clear();
        }
    };

    for line in text.split('\n') {
        let trimmed = line.trim();

        if trimmed == "---" || trimmed == "***" || trimmed == "___" {
            flush(&mut paragraph, &mut blocks);
            blocks.push(Block::HorizontalRule);
        } else if let Some(rest) = trimmed.strip_prefix('#') {
            flush(&mut paragraph, &mut blocks);
            let header = rest.trim_start_matches('#').trim();
            if !header.is_empty() {
                blocks.push(Block::Header(header.to_string()));
            }
        } else if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
            flush(&mut paragraph, &mut blocks);
            blocks.push(Block::ListItem {
                marker: "•".to_string(),
                text: rest.trim().to_string(),
            });
        } else if let Some((marker, rest)) = ordered_item(trimmed) {
            flush(&mut paragraph, &mut blocks);
            blocks.push(Block::ListItem {
                marker: marker.to_string(),
                text: rest.to_string(),
            });
        } else if trimmed.is_empty() {
            flush(&mut paragraph, &mut blocks);
        } else {
            paragraph.push(line);
        }
    }
    flush(&mut paragraph, &mut blocks);
    blocks
}

const BORDER_H: char = '─';

fn styled_segment(seg: &str, palette: &Palette) -> Vec<Span<'static>> {
    if has_inline_markdown(seg) {
        parse_inline_markdown(seg, palette)
    } else {
        vec![Span::styled(seg.to_string(), text_style(palette.text))]
    }
}

/// Render blocks to lines, each starting with `border_span` and [LEFT_PADDING].
/// `indent_len` is the width those take; wrapping uses what is left of `width`.
pub fn render_blocks_to_lines(
    blocks: &[Block],
    palette: &Palette,
    width: usize,
    indent_len: usize,
    border_span: &Span<'static>,
) -> Vec<Line<'static>> {
    let wrap_width = width.saturating_sub(indent_len).max(1);
    let muted = text_muted_style(palette.text_muted);
    let header_style = text_style(palette.text).add_modifier(Modifier::BOLD);
    let lead = || vec![border_span.clone(), Span::raw(LEFT_PADDING)];
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            Block::Paragraph(s) => {
                for seg in wrap_lines(s, wrap_width) {
                    let mut spans = lead();
                    spans.extend(styled_segment(&seg, palette));
                    lines.push(Line::from(spans));
                }
            }
            Block::Header(s) => {
                for seg in wrap_lines(s, wrap_width) {
                    let mut spans = lead();
                    spans.push(Span::styled(seg, header_style));
                    lines.push(Line::from(spans));
                }
            }
            Block::ListItem { marker, text } => {
                let marker = format!("{} ", marker);
                let hang = " ".repeat(marker.chars().count());
                let wrapped = wrap_lines(text, wrap_width.saturating_sub(hang.len()).max(1));
                for (i, seg) in wrapped.iter().enumerate() {
                    let mut spans = lead();
                    if i == 0 {
                        spans.push(Span::styled(marker.clone(), muted));
                    } else {
                        spans.push(Span::raw(hang.clone()));
                    }
                    spans.extend(styled_segment(seg, palette));
                    lines.push(Line::from(spans));
                }
            }
            Block::HorizontalRule => {
                let mut spans = lead();
                spans.push(Span::styled((0..wrap_width).map(|_| BORDER_H).collect::<String>(), muted));
                lines.push(Line::from(spans));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(spans: &[Span]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn bold_parsed() {
        let palette = Palette::dark();
        let spans = parse_inline_markdown("hello **world** ok", &palette);
        assert_eq!(contents(&spans), vec!["hello ", "world", " ok"]);
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn code_parsed() {
        let palette = Palette::dark();
        let spans = parse_inline_markdown("use `Option` here", &palette);
        assert_eq!(contents(&spans), vec!["use ", "Option", " here"]);
    }

    #[test]
    fn inline_markdown_no_markers() {
        let spans = parse_inline_markdown("plain text here", &Palette::dark());
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn unclosed_markers_render_literally() {
        let palette = Palette::dark();
        let joined: String = contents(&parse_inline_markdown("use `Option", &palette)).concat();
        assert_eq!(joined, "use `Option");
        let joined: String = contents(&parse_inline_markdown("this is **bold", &palette)).concat();
        assert_eq!(joined, "this is **bold");
    }

    #[test]
    fn parse_blocks_header_and_paragraph() {
        let blocks = parse_blocks("# Title\nbody");
        assert_eq!(blocks, vec![Block::Header("Title".into()), Block::Paragraph("body".into())]);
    }

    #[test]
    fn parse_blocks_horizontal_rule() {
        let blocks = parse_blocks("above\n---\nbelow");
        assert_eq!(blocks[1], Block::HorizontalRule);
    }

    #[test]
    fn parse_blocks_list_items() {
        let blocks = parse_blocks("- one\n* two\n3. three");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[2], Block::ListItem { marker, text } if marker == "3." && text == "three"));
    }

    #[test]
    fn version_numbers_are_not_list_items() {
        let blocks = parse_blocks("1.5 is out");
        assert_eq!(blocks, vec![Block::Paragraph("1.5 is out".into())]);
    }

    #[test]
    fn render_wraps_paragraph_with_border() {
        let palette = Palette::dark();
        let border = Span::raw("│ ");
        let blocks = parse_blocks("one two three four five");
        let lines = render_blocks_to_lines(&blocks, &palette, 14, 4, &border);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.spans[0].content == "│ "));
    }

    #[test]
    fn render_empty_is_empty() {
        let lines = render_blocks_to_lines(&parse_blocks(""), &Palette::dark(), 40, 4, &Span::raw("│ "));
        assert!(lines.is_empty());
    }
}
