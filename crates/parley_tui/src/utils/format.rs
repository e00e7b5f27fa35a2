//! Formatting helpers for TUI text (durations, truncation, wrapping).

use std::time::Duration;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a duration for display (e.g. "123ms", "2s 450ms").
pub fn format_duration(d: Duration) -> String {
    let ms = d.as_millis();
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        let s = ms / 1000;
        let rest_ms = ms % 1000;
        if rest_ms == 0 {
            format!("{}s", s)
        } else {
            format!("{}s {}ms", s, rest_ms)
        }
    }
}

/// Truncate to `max_width` display columns, ending with "…" when cut.
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Word-wrap text to lines of at most `width` columns (by word boundary).
/// Long words are pushed as their own line. Returns empty vec for empty or whitespace-only input.
pub fn wrap_lines(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut line = String::new();
    for word in s.split_whitespace() {
        let need = if line.is_empty() {
            word.width()
        } else {
            line.width() + 1 + word.width()
        };
        if need <= width {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        } else {
            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            if word.width() <= width {
                line = word.to_string();
            } else {
                out.push(word.to_string());
            }
        }
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}
