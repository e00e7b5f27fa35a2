//! Chat message rendering: a header row, then each segment as prose or a code view.
//!
//! Layout: left border (accent for the user, muted for the assistant), indicator,
//! name and timestamp; body lines indented under the border.

use std::collections::BTreeMap;

use chrono::Local;
use parley_core::{extract, format_code, Message, Role, Segment};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::markdown::{parse_blocks, render_blocks_to_lines};
use crate::code_view::{code_view_lines, CodeView, WidgetKey};
use crate::layouts::{text_muted_style, text_style};
use crate::reveal::{first_words, Reveal, Visibility};
use crate::theme::Palette;
use crate::utils::{wrap_lines, LEFT_PADDING};

pub const USER_INDICATOR: &str = "»";
pub const ASSISTANT_INDICATOR: &str = "▸";
pub const USER_NAME: &str = "You";

/// Left border (2-char) before every message line.
const LEFT_BORDER: &str = "│ ";

/// Cursor drawn after the last revealed word.
pub const REVEAL_CURSOR: &str = "▌";

/// Segments to display for a stored message.
///
/// Fenced JSON is pretty-printed. The legacy `code` field follows the content
/// as its own code segment, shown as stored.
pub fn display_segments(message: &Message) -> Vec<Segment> {
    let mut segments: Vec<Segment> = match message.content() {
        Some(content) => extract(content)
            .into_iter()
            .map(|segment| match segment {
                Segment::Code { language, content } => {
                    let formatted = format_code(&content, &language);
                    Segment::Code {
                        language,
                        content: formatted,
                    }
                }
                text => text,
            })
            .collect(),
        None => Vec::new(),
    };
    if let Some(code) = message.code() {
        segments.push(Segment::code(message.language().unwrap_or_default(), code));
    }
    segments
}

/// A stored message as the chat shows it.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Store index; also the `message` half of each [WidgetKey].
    pub index: usize,
    pub role: Role,
    pub segments: Vec<Segment>,
    /// Short local time, e.g. "10:32".
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(index: usize, message: &Message) -> Self {
        Self {
            index,
            role: message.role(),
            segments: display_segments(message),
            timestamp: message
                .timestamp()
                .with_timezone(&Local)
                .format("%H:%M")
                .to_string(),
        }
    }

    /// Keys and initial views for this message's code segments.
    pub fn code_views(&self) -> impl Iterator<Item = (WidgetKey, CodeView)> + '_ {
        self.segments.iter().enumerate().filter_map(|(i, segment)| match segment {
            Segment::Code { language, content } => {
                Some((WidgetKey::new(self.index, i), CodeView::new(language.clone(), content)))
            }
            Segment::Text { .. } => None,
        })
    }

    /// Plain text of the message (content as displayed, code segments fenced).
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Text { content } => content.clone(),
                Segment::Code { language, content } => format!("```{}\n{}\n```", language, content),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// What the renderer needs besides the message itself.
pub struct RenderContext<'a> {
    pub palette: &'a Palette,
    pub width: usize,
    /// Edited views by key; a missing key renders the segment as received.
    pub code_views: &'a BTreeMap<WidgetKey, CodeView>,
    pub focus: Option<WidgetKey>,
    /// The live reply's progress, if this message is being revealed.
    pub reveal: Option<&'a Reveal>,
    pub assistant_name: &'a str,
}

/// Lines for one message, plus the line offset where each code view starts.
pub fn chat_message_lines(msg: &ChatMessage, ctx: &RenderContext) -> (Vec<Line<'static>>, Vec<(WidgetKey, usize)>) {
    let palette = ctx.palette;
    let (border_color, indicator, name) = match msg.role {
        Role::User => (palette.accent, USER_INDICATOR, USER_NAME),
        Role::Assistant => (palette.text_muted, ASSISTANT_INDICATOR, ctx.assistant_name),
    };
    let border_span = Span::styled(LEFT_BORDER.to_string(), text_style(border_color));
    let indent_len = LEFT_BORDER.chars().count() + LEFT_PADDING.len();
    let body_width = ctx.width.saturating_sub(indent_len).max(1);

    let mut lines = vec![Line::from(vec![
        border_span.clone(),
        Span::styled(format!("{} ", indicator), text_style(palette.accent)),
        Span::styled(name.to_string(), text_style(palette.text).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {}", msg.timestamp), text_muted_style(palette.text_muted)),
    ])];
    let mut anchors = Vec::new();

    for (i, segment) in msg.segments.iter().enumerate() {
        let visibility = ctx
            .reveal
            .filter(|r| r.message() == msg.index)
            .map_or(Visibility::Full, |r| r.visibility(i));

        match (segment, visibility) {
            (_, Visibility::Hidden) => {}
            (Segment::Text { content }, Visibility::Words(n)) => {
                let shown = first_words(content, n);
                let mut wrapped = wrap_lines(&shown, body_width);
                if wrapped.is_empty() {
                    wrapped.push(String::new());
                }
                let last = wrapped.len() - 1;
                for (row, seg) in wrapped.into_iter().enumerate() {
                    let mut spans = vec![
                        border_span.clone(),
                        Span::raw(LEFT_PADDING),
                        Span::styled(seg, text_style(palette.text)),
                    ];
                    if row == last {
                        spans.push(Span::styled(REVEAL_CURSOR.to_string(), text_style(palette.accent)));
                    }
                    lines.push(Line::from(spans));
                }
            }
            (Segment::Text { content }, _) => {
                let blocks = parse_blocks(content);
                lines.extend(render_blocks_to_lines(&blocks, palette, ctx.width, indent_len, &border_span));
            }
            (Segment::Code { language, content }, _) => {
                let key = WidgetKey::new(msg.index, i);
                let fallback;
                let view = match ctx.code_views.get(&key) {
                    Some(view) => view,
                    None => {
                        fallback = CodeView::new(language.clone(), content);
                        &fallback
                    }
                };
                anchors.push((key, lines.len()));
                for line in code_view_lines(view, palette, body_width, ctx.focus == Some(key)) {
                    let mut spans = vec![border_span.clone(), Span::raw(LEFT_PADDING)];
                    spans.extend(line.spans);
                    lines.push(Line::from(spans));
                }
            }
        }
    }
    (lines, anchors)
}
