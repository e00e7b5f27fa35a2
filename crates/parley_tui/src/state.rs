//! TUI state: chat items, code views, reveal, input buffer, scroll, theme.
//!
//! [TuiState] holds everything the view needs to render. Chat items mirror the
//! runtime's conversation store in order; each message keeps its store index.

use std::collections::BTreeMap;
use std::time::Instant;

use parley_core::{Message, Role};

use crate::branding::Branding;
use crate::code_view::{CodeView, WidgetKey};
use crate::messages::chat::ChatMessage;
use crate::messages::error::ErrorMessage;
use crate::reveal::Reveal;
use crate::theme::{Appearance, Palette};
use crate::utils::MAX_TRACE_LINES;

/// Which screen is currently shown (main chat vs debug traces).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    DebugTraces,
}

/// One item in the chat.
#[derive(Debug, Clone)]
pub enum ChatItem {
    Message(ChatMessage),
    Error(ErrorMessage),
}

#[derive(Debug)]
pub struct TuiState {
    pub messages: Vec<ChatItem>,
    pub input_buffer: String,
    /// Byte offset within input_buffer (0..=len).
    pub input_cursor: usize,
    /// Lines scrolled up from the bottom (0 = at bottom).
    pub scroll: usize,
    /// When true, keep scroll at bottom on new content; when false, user scrolled up.
    pub auto_scroll: bool,
    pub palette: Palette,
    pub branding: Branding,
    /// Header status text; empty means ready.
    pub status: String,
    /// When the status was set; transient statuses clear after a while.
    pub status_set_at: Option<Instant>,
    /// True from TurnStart(Assistant) until TurnEnd.
    pub pending: bool,
    pub pending_since: Option<Instant>,
    /// Word-by-word reveal of the live reply.
    pub reveal: Option<Reveal>,
    /// Code views by key. Edits live here and survive re-renders.
    pub code_views: BTreeMap<WidgetKey, CodeView>,
    /// Code view that owns the keyboard, if any.
    pub focus: Option<WidgetKey>,
    /// Scroll the focused view into sight on the next draw.
    pub follow_focus: bool,
    pub frame_count: u64,
    /// When true, next draw should run; cleared after draw.
    pub needs_redraw: bool,
    /// Cached chat lines; invalidated by any content change or resize.
    pub cached_lines: Vec<ratatui::text::Line<'static>>,
    /// First line of each code view within cached_lines.
    pub code_anchors: Vec<(WidgetKey, usize)>,
    pub cache_dirty: bool,
    pub last_content_height: usize,
    pub last_viewport_height: usize,
    pub screen: Screen,
    /// Debug trace lines (runtime logs). Newest at end.
    pub trace_lines: Vec<String>,
    pub trace_scroll: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input_buffer: String::new(),
            input_cursor: 0,
            scroll: 0,
            auto_scroll: true,
            palette: Palette::dark(),
            branding: Branding::plain(),
            status: String::new(),
            status_set_at: None,
            pending: false,
            pending_since: None,
            reveal: None,
            code_views: BTreeMap::new(),
            focus: None,
            follow_focus: false,
            frame_count: 0,
            needs_redraw: true,
            cached_lines: Vec::new(),
            code_anchors: Vec::new(),
            cache_dirty: true,
            last_content_height: 0,
            last_viewport_height: 0,
            screen: Screen::Main,
            trace_lines: Vec::new(),
            trace_scroll: 0,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.palette = Palette::for_appearance(appearance);
        self
    }

    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }

    fn content_changed(&mut self) {
        self.cache_dirty = true;
        self.needs_redraw = true;
        if self.auto_scroll {
            self.scroll = 0;
        }
    }

    /// A reply is in flight or still being revealed; input is not submitted.
    pub fn is_busy(&self) -> bool {
        self.pending || self.reveal.is_some()
    }

    /// Show a stored message. A `live` assistant reply is revealed word by word
    /// starting at `now`; anything else appears at once.
    pub fn push_message(&mut self, index: usize, message: &Message, live: bool, now: Instant) {
        let chat = ChatMessage::new(index, message);
        for (key, view) in chat.code_views() {
            self.code_views.entry(key).or_insert(view);
        }
        if live && chat.role == Role::Assistant {
            let reveal = Reveal::new(index, &chat.segments, now);
            self.reveal = (!reveal.is_done()).then_some(reveal);
        }
        self.messages.push(ChatItem::Message(chat));
        self.content_changed();
    }

    pub fn push_error(&mut self, text: String, timestamp: Option<String>) {
        self.messages.push(ChatItem::Error(ErrorMessage { text, timestamp }));
        self.content_changed();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_set_at = (!self.status.is_empty()).then(Instant::now);
        self.needs_redraw = true;
    }

    /// Advance the reveal. Returns true when the chat needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(reveal) = self.reveal.as_mut() else {
            return false;
        };
        if !reveal.tick(now) {
            return false;
        }
        if reveal.is_done() {
            self.reveal = None;
        }
        self.content_changed();
        true
    }

    /// Show the rest of the live reply at once.
    pub fn skip_reveal(&mut self) {
        if let Some(mut reveal) = self.reveal.take() {
            reveal.finish();
            self.content_changed();
        }
    }

    // --- Code view focus

    /// Move focus to the next code view (or the first). Ignored while a reply is revealed.
    pub fn focus_next(&mut self) -> bool {
        self.cycle_focus(true)
    }

    pub fn focus_prev(&mut self) -> bool {
        self.cycle_focus(false)
    }

    fn cycle_focus(&mut self, forward: bool) -> bool {
        if self.reveal.is_some() || self.code_views.is_empty() {
            return false;
        }
        let first = self.code_views.keys().next().copied();
        let last = self.code_views.keys().next_back().copied();
        let next = match (self.focus, forward) {
            (None, true) => first,
            (None, false) => last,
            (Some(current), true) => self
                .code_views
                .range(current..)
                .map(|(k, _)| *k)
                .find(|k| *k != current)
                .or(first),
            (Some(current), false) => self
                .code_views
                .range(..current)
                .next_back()
                .map(|(k, _)| *k)
                .or(last),
        };
        self.focus = next;
        self.follow_focus = true;
        self.cache_dirty = true;
        self.needs_redraw = true;
        next.is_some()
    }

    pub fn clear_focus(&mut self) {
        if self.focus.take().is_some() {
            self.cache_dirty = true;
            self.needs_redraw = true;
        }
    }

    /// Apply `edit` to the focused code view.
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut CodeView)) {
        if let Some(view) = self.focus.and_then(|key| self.code_views.get_mut(&key)) {
            edit(view);
            self.follow_focus = true;
            self.cache_dirty = true;
            self.needs_redraw = true;
        }
    }

    /// Text for Ctrl+Y: the focused code view, else the last assistant message.
    pub fn copy_text(&self) -> Option<String> {
        if let Some(view) = self.focus.and_then(|key| self.code_views.get(&key)) {
            return Some(view.text());
        }
        self.messages.iter().rev().find_map(|item| match item {
            ChatItem::Message(m) if m.role == Role::Assistant => Some(m.plain_text()),
            _ => None,
        })
    }

    // --- Input line

    /// Insert character at cursor.
    pub fn input_insert(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.needs_redraw = true;
    }

    /// Delete character before cursor (UTF-8 safe).
    pub fn input_backspace(&mut self) {
        if let Some((start, _)) = self.input_buffer[..self.input_cursor].char_indices().next_back() {
            self.input_buffer.drain(start..self.input_cursor);
            self.input_cursor = start;
            self.needs_redraw = true;
        }
    }

    /// Delete character at cursor (UTF-8 safe).
    pub fn input_delete(&mut self) {
        if let Some(c) = self.input_buffer[self.input_cursor..].chars().next() {
            self.input_buffer.drain(self.input_cursor..self.input_cursor + c.len_utf8());
            self.needs_redraw = true;
        }
    }

    pub fn input_cursor_left(&mut self) {
        if let Some((start, _)) = self.input_buffer[..self.input_cursor].char_indices().next_back() {
            self.input_cursor = start;
            self.needs_redraw = true;
        }
    }

    pub fn input_cursor_right(&mut self) {
        if let Some(c) = self.input_buffer[self.input_cursor..].chars().next() {
            self.input_cursor += c.len_utf8();
            self.needs_redraw = true;
        }
    }

    pub fn input_cursor_home(&mut self) {
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    pub fn input_cursor_end(&mut self) {
        self.input_cursor = self.input_buffer.len();
        self.needs_redraw = true;
    }

    /// Clear entire input buffer (Ctrl+U).
    pub fn input_clear_line(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Clear and return the current line (for submit).
    pub fn input_take(&mut self) -> String {
        let line = std::mem::take(&mut self.input_buffer);
        self.input_cursor = 0;
        self.needs_redraw = true;
        line
    }

    // --- Scrolling

    /// Scroll up (increase offset); disables auto_scroll.
    pub fn scroll_up(&mut self, delta: usize) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll down (decrease offset); re-enables auto_scroll when at bottom.
    pub fn scroll_down(&mut self, delta: usize) {
        self.scroll = self.scroll.saturating_sub(delta);
        if self.scroll == 0 {
            self.auto_scroll = true;
        }
        self.needs_redraw = true;
    }

    /// Append a line to the debug trace buffer. Drops oldest if over capacity.
    pub fn push_trace_line(&mut self, line: String) {
        self.trace_lines.push(line);
        if self.trace_lines.len() > MAX_TRACE_LINES {
            self.trace_lines.drain(0..self.trace_lines.len() - MAX_TRACE_LINES);
        }
        if self.screen == Screen::DebugTraces {
            self.needs_redraw = true;
        }
    }

    pub fn trace_scroll_up(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    pub fn trace_scroll_down(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }

    pub fn toggle_debug_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Main => Screen::DebugTraces,
            Screen::DebugTraces => Screen::Main,
        };
        self.needs_redraw = true;
    }
}
