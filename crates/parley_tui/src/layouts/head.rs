//! Header strip: branding banner and title on the left, status with a colored dot on the right.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::style::{background_style, border_style, danger_style, text_muted_style, text_style};
use crate::branding::Branding;
use crate::theme::Palette;
use crate::utils::{horizontal_padding, truncate_ellipsis};

/// Default status when none is set.
pub const HEADER_STATUS_READY: &str = "Ready";

/// Status dot state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Ready,
    Busy,
    Error,
}

/// Header height for `branding`: banner rows plus the bottom border.
pub fn header_height(branding: &Branding) -> u16 {
    branding.rows() + 1
}

/// Header rows. The title sits after the banner on its middle row; the status goes on the first row.
pub fn header_lines(
    branding: &Branding,
    status: &str,
    state: HeaderState,
    palette: &Palette,
    width: u16,
) -> Vec<Line<'static>> {
    let title_style = text_style(palette.text).add_modifier(Modifier::BOLD);
    let banner_style = text_style(palette.accent);
    let dot_style = match state {
        HeaderState::Error => danger_style(palette.danger),
        HeaderState::Busy => text_style(palette.warning),
        HeaderState::Ready => text_style(palette.success),
    };

    let banner = branding.banner();
    let banner_width = banner.iter().map(|l| l.width()).max().unwrap_or(0);
    let title_row = banner.len().saturating_sub(1) / 2;

    let rows = banner.len().max(1);
    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut spans = Vec::new();
        let mut used = 0;
        if let Some(b) = banner.get(row) {
            spans.push(Span::styled(format!("{:<banner_width$}", b), banner_style));
            used += banner_width;
        }
        if row == title_row {
            let title = if banner.is_empty() {
                branding.title().to_string()
            } else {
                format!("  {}", branding.title())
            };
            used += title.width();
            spans.push(Span::styled(title, title_style));
        }
        if row == 0 {
            // long statuses (errors) give way to the title
            let status = truncate_ellipsis(status, (width as usize).saturating_sub(used + 3));
            let right_len = 2 + status.width();
            let gap = (width as usize).saturating_sub(used + right_len);
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::styled("● ".to_string(), dot_style));
            spans.push(Span::styled(status.to_string(), text_muted_style(palette.text_muted)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Draw the header block: branding rows, then a bottom border.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    branding: &Branding,
    status: &str,
    state: HeaderState,
) {
    let inner = horizontal_padding(area);
    let bg = background_style(palette.status_bar_background);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(bg);
    frame.render_widget(block, area);
    let lines = header_lines(branding, status, state, palette, inner.width);
    frame.render_widget(Paragraph::new(lines).style(bg), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn plain_branding_shows_title_and_status() {
        let palette = Palette::dark();
        let lines = header_lines(&Branding::plain(), "Ready", HeaderState::Ready, &palette, 40);
        assert_eq!(lines.len(), 1);
        let row = text(&lines[0]);
        assert!(row.starts_with("BB-GPT"));
        assert!(row.ends_with("● Ready"));
        assert_eq!(row.width(), 40);
    }

    #[test]
    fn banner_rows_with_title_in_middle() {
        let palette = Palette::dark();
        let branding = Branding::from_banner("+--+\n|bb|\n+--+");
        let lines = header_lines(&branding, "Ready", HeaderState::Busy, &palette, 60);
        assert_eq!(lines.len(), 3);
        assert!(text(&lines[0]).starts_with("+--+"));
        assert!(text(&lines[1]).contains("|bb|  BB-GPT"));
        assert!(!text(&lines[2]).contains("Ready"));
        assert_eq!(header_height(&branding), 4);
    }

    #[test]
    fn long_status_is_truncated() {
        let palette = Palette::dark();
        let status = "request failed: connection refused by upstream gateway";
        let lines = header_lines(&Branding::plain(), status, HeaderState::Error, &palette, 30);
        let row = text(&lines[0]);
        assert!(row.starts_with("BB-GPT"));
        assert!(row.ends_with('…'));
        assert_eq!(row.width(), 30);
    }

    #[test]
    fn narrow_width_does_not_panic() {
        let palette = Palette::dark();
        let lines = header_lines(&Branding::plain(), "Waiting for reply", HeaderState::Error, &palette, 3);
        assert_eq!(lines.len(), 1);
    }
}
