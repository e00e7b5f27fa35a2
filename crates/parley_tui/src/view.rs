//! TUI view: header (fixed top), scrollable chat body, shortcut + input (fixed bottom).

use parley_constant::app::INPUT_PLACEHOLDER;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::code_view::WidgetKey;
use crate::layouts::{
    HEADER_STATUS_READY, HeaderState, INPUT_ICON, ShortcutMode, background_style, block_for_input, border_style,
    header_height, main_splits, render_header, rgb_to_color, shortcut_inner_rect, shortcut_line, text_muted_style,
    text_style, vertical_split,
};
use crate::messages::chat::{RenderContext, chat_message_lines};
use crate::messages::error::error_message_lines;
use crate::state::{ChatItem, Screen, TuiState};
use crate::utils::{MESSAGE_SPACING_LINES, centered, horizontal_padding};

const WELCOME_HINT: &str = "Type a message to begin.";

/// Draw the full TUI: main chat or debug traces depending on state.screen.
pub fn draw(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    match state.screen {
        Screen::DebugTraces => draw_debug_traces(frame, state, area),
        Screen::Main => draw_main(frame, state, area),
    }
}

/// Runtime logs screen: scrollable list of tracing output. Ctrl+D to close.
fn draw_debug_traces(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let palette = &state.palette;
    let block = Block::default()
        .title(" Runtime logs (Ctrl+D to close) ")
        .borders(Borders::ALL)
        .border_style(border_style(palette.border))
        .style(background_style(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let viewport_height = inner.height as usize;
    let max_scroll = state.trace_lines.len().saturating_sub(viewport_height);
    state.trace_scroll = state.trace_scroll.min(max_scroll);

    let lines: Vec<Line> = state
        .trace_lines
        .iter()
        .skip(state.trace_scroll)
        .take(viewport_height)
        .map(|s| Line::from(Span::styled(s.clone(), text_muted_style(palette.text_muted))))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Chat lines for `width`, plus the absolute line where each code view starts.
fn build_chat_lines(state: &TuiState, width: usize) -> (Vec<Line<'static>>, Vec<(WidgetKey, usize)>) {
    let ctx = RenderContext {
        palette: &state.palette,
        width,
        code_views: &state.code_views,
        focus: state.focus,
        reveal: state.reveal.as_ref(),
        assistant_name: state.branding.title(),
    };
    let mut lines = Vec::new();
    let mut anchors = Vec::new();
    for item in &state.messages {
        if !lines.is_empty() {
            lines.extend(std::iter::repeat_n(Line::from(""), MESSAGE_SPACING_LINES));
        }
        match item {
            ChatItem::Message(m) => {
                let (msg_lines, msg_anchors) = chat_message_lines(m, &ctx);
                let base = lines.len();
                anchors.extend(msg_anchors.into_iter().map(|(key, at)| (key, base + at)));
                lines.extend(msg_lines);
            }
            ChatItem::Error(e) => lines.extend(error_message_lines(e, &state.palette, width)),
        }
    }
    (lines, anchors)
}

/// Scroll so the focused code view's box is inside the viewport.
fn follow_focus(state: &mut TuiState, max_scroll: usize, viewport_height: usize) {
    let Some(key) = state.focus else {
        return;
    };
    let Some(&(_, start)) = state.code_anchors.iter().find(|(k, _)| *k == key) else {
        return;
    };
    let height = state.code_views.get(&key).map_or(0, |v| v.visible_height()) + 2;
    let offset = max_scroll.saturating_sub(state.scroll);
    let new_offset = if start < offset || height > viewport_height {
        start
    } else if start + height > offset + viewport_height {
        start + height - viewport_height
    } else {
        offset
    };
    state.scroll = max_scroll.saturating_sub(new_offset.min(max_scroll));
    state.auto_scroll = state.scroll == 0;
}

/// Main chat view: header, scrollable chat body, shortcut + input fixed bottom.
fn draw_main(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let splits = main_splits(area, header_height(&state.branding));

    // ---- Header (fixed at top) ----
    let status = if state.status.is_empty() {
        HEADER_STATUS_READY
    } else {
        state.status.as_str()
    };
    let header_state = if state.is_busy() {
        HeaderState::Busy
    } else if !state.status.is_empty() && matches!(state.messages.last(), Some(ChatItem::Error(_))) {
        HeaderState::Error
    } else {
        HeaderState::Ready
    };
    render_header(frame, splits.header, &state.palette, &state.branding, status, header_state);

    // ---- Body: scrollable chat ----
    let body = horizontal_padding(splits.body);
    // last column is the scrollbar
    let width = body.width.saturating_sub(1) as usize;
    let viewport_height = body.height as usize;

    if state.cache_dirty || state.cached_lines.is_empty() {
        let (lines, anchors) = build_chat_lines(state, width);
        state.cached_lines = lines;
        state.code_anchors = anchors;
        state.cache_dirty = false;
    }
    let content_height = state.cached_lines.len();

    // Scroll clamp: state.scroll is "lines scrolled UP from bottom" (0 = at bottom).
    let max_scroll = content_height.saturating_sub(viewport_height);
    state.scroll = state.scroll.min(max_scroll);
    if state.follow_focus {
        follow_focus(state, max_scroll, viewport_height);
        state.follow_focus = false;
    }
    state.last_content_height = content_height;
    state.last_viewport_height = viewport_height;

    let palette = &state.palette;
    let offset_from_top = max_scroll.saturating_sub(state.scroll);

    if state.messages.is_empty() {
        let welcome = vec![
            Line::from(Span::styled(state.branding.title(), text_style(palette.text))),
            Line::from(""),
            Line::from(Span::styled(WELCOME_HINT, text_muted_style(palette.text_muted))),
        ];
        let rect = centered(body, WELCOME_HINT.width() as u16 + 4, welcome.len() as u16);
        frame.render_widget(Paragraph::new(welcome).alignment(Alignment::Center), rect);
    } else {
        let visible: Vec<Line> = state
            .cached_lines
            .iter()
            .skip(offset_from_top)
            .take(viewport_height)
            .cloned()
            .collect();
        frame.render_widget(Paragraph::new(visible), body);
    }

    // Scrollbar when content exceeds viewport
    if content_height > viewport_height && viewport_height > 0 {
        let thumb_height = ((viewport_height * viewport_height).div_ceil(content_height.max(1)) as u16).max(1);
        let scroll_ratio = if max_scroll == 0 {
            1.0
        } else {
            offset_from_top as f64 / max_scroll as f64
        };
        let thumb_y = (scroll_ratio * (viewport_height as f64 - thumb_height as f64)).round() as u16;
        let track = Rect {
            x: body.x + body.width.saturating_sub(1),
            y: body.y,
            width: 1,
            height: body.height,
        };
        frame.render_widget(
            Block::default().style(Style::default().bg(rgb_to_color(palette.scrollbar_track_background))),
            track,
        );
        let thumb = Rect {
            y: track.y + thumb_y,
            height: thumb_height,
            ..track
        };
        frame.render_widget(
            Block::default().style(Style::default().bg(rgb_to_color(palette.scrollbar_thumb_background))),
            thumb,
        );
    }

    // ---- Footer: input block + shortcut ----
    let (input_rect, shortcut_rect) = vertical_split(splits.footer, 3);
    let input_focused = state.focus.is_none();
    let block = block_for_input(palette, input_focused);
    let inner = block.inner(input_rect);
    frame.render_widget(block, input_rect);

    let (icon_style, content_style) = if state.input_buffer.is_empty() {
        (text_style(palette.accent), text_style(palette.text_placeholder))
    } else {
        (text_style(palette.success), text_style(palette.text))
    };
    let content = if state.input_buffer.is_empty() {
        INPUT_PLACEHOLDER.to_string()
    } else {
        state.input_buffer.clone()
    };
    let input_line = Line::from(vec![
        Span::styled(INPUT_ICON, icon_style),
        Span::styled(content, content_style),
    ]);
    frame.render_widget(Paragraph::new(input_line), inner);

    if input_focused && inner.height > 0 {
        // display width (unicode-width) for position
        let before_cursor = &state.input_buffer[..state.input_cursor.min(state.input_buffer.len())];
        let cursor_col = (inner.x + INPUT_ICON.width() as u16 + before_cursor.width() as u16).min(inner.x + inner.width);
        frame.set_cursor_position((cursor_col, inner.y));
    }

    let mode = if state.is_busy() {
        ShortcutMode::Busy
    } else if state.focus.is_some() {
        ShortcutMode::Editing
    } else if !state.input_buffer.is_empty() {
        ShortcutMode::Typing
    } else {
        ShortcutMode::Idle
    };
    frame.render_widget(Paragraph::new(shortcut_line(palette, mode)), shortcut_inner_rect(shortcut_rect));
}
