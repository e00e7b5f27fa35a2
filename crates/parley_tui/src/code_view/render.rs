//! Code view lines: bordered box, language label, gutter, highlighted code.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::editor::CodeView;
use super::highlight::highlight_code_line;
use crate::layouts::{border_style, code_style, text_style};
use crate::theme::{Palette, Rgb};

/// Label shown when the fence had no language.
pub const PLAIN_LABEL: &str = "text";

/// Narrowest box we draw; below this the code is shown without chrome.
const MIN_WIDTH: usize = 12;

fn gutter_width(view: &CodeView) -> usize {
    view.lines().len().to_string().len().max(2)
}

/// Chars from `skip` that fit in `width` columns.
fn visible_slice(line: &str, skip: usize, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in line.chars().skip(skip) {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

/// Tokens to spans, drawing the cursor block at char index `cursor` (may be one past the end).
fn code_spans(tokens: Vec<(Rgb, String)>, bg: Rgb, cursor: Option<(usize, &Palette)>) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(tokens.len() + 2);
    let mut pos = 0;
    let mut cursor_drawn = false;
    for (fg, text) in tokens {
        let len = text.chars().count();
        match cursor {
            Some((at, palette)) if !cursor_drawn && at >= pos && at < pos + len => {
                let before: String = text.chars().take(at - pos).collect();
                let under: String = text.chars().skip(at - pos).take(1).collect();
                let after: String = text.chars().skip(at - pos + 1).collect();
                if !before.is_empty() {
                    spans.push(Span::styled(before, code_style(fg, bg)));
                }
                spans.push(Span::styled(under, code_style(palette.code.background, palette.code.cursor)));
                if !after.is_empty() {
                    spans.push(Span::styled(after, code_style(fg, bg)));
                }
                cursor_drawn = true;
            }
            _ => spans.push(Span::styled(text, code_style(fg, bg))),
        }
        pos += len;
    }
    if let Some((_, palette)) = cursor
        && !cursor_drawn
    {
        spans.push(Span::styled(" ", code_style(palette.code.background, palette.code.cursor)));
    }
    spans
}

fn header_info(view: &CodeView) -> String {
    let total = view.lines().len();
    let rows = view.visible_rows();
    let mut parts = Vec::new();
    if rows.len() < total {
        parts.push(format!("{}-{}/{}", rows.start + 1, rows.end, total));
    }
    if view.is_edited() {
        parts.push("edited".to_string());
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" {} ", parts.join(" · "))
    }
}

/// Render `view` into `width` columns. When `focused`, the border is highlighted and
/// the cursor row and cell are drawn.
pub fn code_view_lines(view: &CodeView, palette: &Palette, width: usize, focused: bool) -> Vec<Line<'static>> {
    let code = &palette.code;
    let label = if view.language().is_empty() {
        PLAIN_LABEL
    } else {
        view.language()
    };

    if width < MIN_WIDTH {
        return view
            .lines()
            .iter()
            .map(|l| Line::from(Span::styled(visible_slice(l, 0, width), code_style(code.foreground, code.background))))
            .collect();
    }

    let frame = border_style(if focused {
        palette.border_focused
    } else {
        palette.text_muted
    });
    let num_w = gutter_width(view);
    let code_w = width.saturating_sub(2 + num_w + 3).max(1);
    let (cursor_row, cursor_col) = view.cursor();
    let h_off = if focused && cursor_col >= code_w {
        cursor_col + 1 - code_w
    } else {
        0
    };

    let mut lines = Vec::with_capacity(view.visible_height() + 2);

    let left = format!("╭─ {} ", label);
    let info = header_info(view);
    let fill = width.saturating_sub(left.width() + info.width() + 1);
    lines.push(Line::from(vec![
        Span::styled("╭─ ".to_string(), frame),
        Span::styled(label.to_string(), text_style(palette.accent).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {}", "─".repeat(fill)), frame),
        Span::styled(info, text_style(palette.text_muted)),
        Span::styled("╮".to_string(), frame),
    ]));

    for row in view.visible_rows() {
        let current = focused && row == cursor_row;
        let bg = if current { code.line_highlight } else { code.background };
        let text = visible_slice(&view.lines()[row], h_off, code_w);
        let used = text.width();
        let tokens = highlight_code_line(&text, view.language(), code);
        let cursor = current.then(|| (cursor_col - h_off, palette));

        let mut spans = vec![
            Span::styled("│".to_string(), frame),
            Span::styled(format!("{:>num_w$} │ ", row + 1), code_style(code.gutter, bg)),
        ];
        spans.extend(code_spans(tokens, bg, cursor));
        let cursor_cell = usize::from(current && cursor_col - h_off >= text.chars().count());
        let pad = code_w.saturating_sub(used + cursor_cell);
        spans.push(Span::styled(" ".repeat(pad), code_style(code.foreground, bg)));
        spans.push(Span::styled("│".to_string(), frame));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width.saturating_sub(2))),
        frame,
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn box_has_label_gutter_and_fixed_width() {
        let view = CodeView::new("python", "print(1)\nx = 2");
        let lines = code_view_lines(&view, &Palette::dark(), 30, false);
        assert_eq!(lines.len(), 4);
        assert!(text(&lines[0]).starts_with("╭─ python "));
        assert!(text(&lines[1]).starts_with("│ 1 │ print(1)"));
        assert!(text(&lines[3]).starts_with("╰"));
        for line in &lines {
            assert_eq!(text(line).width(), 30, "{:?}", text(line));
        }
    }

    #[test]
    fn empty_language_uses_plain_label() {
        let view = CodeView::new("", "plain");
        let lines = code_view_lines(&view, &Palette::dark(), 30, false);
        assert!(text(&lines[0]).contains(PLAIN_LABEL));
    }

    #[test]
    fn long_code_shows_range_in_header() {
        let content: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
        let view = CodeView::new("", &content.join("\n"));
        let lines = code_view_lines(&view, &Palette::dark(), 40, false);
        assert_eq!(lines.len(), crate::utils::CODE_VIEW_MAX_LINES + 2);
        assert!(text(&lines[0]).contains("1-12/20"));
    }

    #[test]
    fn focused_view_draws_cursor_cell() {
        let palette = Palette::dark();
        let mut view = CodeView::new("", "ab");
        view.move_end();
        let lines = code_view_lines(&view, &palette, 30, true);
        let cursor_bg = code_style(palette.code.background, palette.code.cursor);
        assert!(lines[1].spans.iter().any(|s| s.style == cursor_bg));
        assert_eq!(text(&lines[1]).width(), 30);
    }

    #[test]
    fn long_line_is_clipped() {
        let view = CodeView::new("", &"x".repeat(200));
        let lines = code_view_lines(&view, &Palette::dark(), 30, false);
        assert_eq!(text(&lines[1]).width(), 30);
    }

    #[test]
    fn narrow_width_skips_chrome() {
        let view = CodeView::new("rust", "fn main() {}");
        let lines = code_view_lines(&view, &Palette::dark(), 5, false);
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), "fn ma");
    }
}
