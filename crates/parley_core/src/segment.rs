//! Splitting reply text into prose and fenced code segments.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Code fence delimiter.
pub const FENCE: &str = "```";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Text,
    Code,
}

/// A typed, ordered piece of reply text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    Text { content: String },
    /// `language` is lower-cased and may be empty.
    Code { language: String, content: String },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text {
            content: content.into(),
        }
    }

    pub fn code(language: impl Into<String>, content: impl Into<String>) -> Self {
        Segment::Code {
            language: language.into(),
            content: content.into(),
        }
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Text { .. } => SegmentKind::Text,
            Segment::Code { .. } => SegmentKind::Code,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Segment::Text { content } | Segment::Code { content, .. } => content,
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            Segment::Text { .. } => None,
            Segment::Code { language, .. } => Some(language),
        }
    }
}

/// Split `text` into ordered segments.
///
/// Spans between fences alternate prose / code. An unterminated fence is not
/// detected: everything after the last delimiter becomes code.
pub fn extract(text: &str) -> Vec<Segment> {
    if !text.contains(FENCE) {
        return vec![Segment::text(text.trim())];
    }

    text.split(FENCE)
        .enumerate()
        .filter_map(|(i, span)| {
            if i % 2 == 0 {
                prose_segment(span)
            } else {
                fenced_segment(span)
            }
        })
        .collect()
}

fn prose_segment(span: &str) -> Option<Segment> {
    let content = span.trim();
    (!content.is_empty()).then(|| Segment::text(content))
}

/// The span is trimmed, then its first line is the language label and the rest
/// is the body. A span left with a single line is dropped, so an unlabeled
/// fence around one line of code yields nothing.
fn fenced_segment(span: &str) -> Option<Segment> {
    let Some((label, body)) = span.trim().split_once('\n') else {
        debug!(label = span.trim(), "dropping code fence without a body");
        return None;
    };
    Some(Segment::code(label.trim().to_lowercase(), body.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fence_returns_trimmed_text() {
        assert_eq!(
            extract("  hello\nworld  \n"),
            vec![Segment::text("hello\nworld")]
        );
    }

    #[test]
    fn test_empty_input_is_single_text_segment() {
        assert_eq!(extract(""), vec![Segment::text("")]);
    }

    #[test]
    fn test_text_code_text() {
        let segments = extract("a\n```python\nprint(1)\n```\nb");
        assert_eq!(
            segments,
            vec![
                Segment::text("a"),
                Segment::code("python", "print(1)"),
                Segment::text("b"),
            ]
        );
    }

    #[test]
    fn test_bodiless_fence_is_dropped() {
        assert_eq!(extract("```json\n```"), Vec::<Segment>::new());
        assert_eq!(
            extract("before\n```json\n```\nafter"),
            vec![Segment::text("before"), Segment::text("after")]
        );
    }

    #[test]
    fn test_unterminated_fence_swallows_trailing_prose() {
        let segments = extract("intro\n```rust\nfn main() {}\nstill prose?");
        assert_eq!(
            segments,
            vec![
                Segment::text("intro"),
                Segment::code("rust", "fn main() {}\nstill prose?"),
            ]
        );
    }

    #[test]
    fn test_language_is_lowercased_and_trimmed() {
        let segments = extract("```  Python \nx = 1\n```");
        assert_eq!(segments, vec![Segment::code("python", "x = 1")]);
    }

    #[test]
    fn test_unlabeled_single_line_fence_is_dropped() {
        assert_eq!(extract("```\nplain\n```"), Vec::<Segment>::new());
    }

    #[test]
    fn test_unlabeled_fence_takes_first_body_line_as_label() {
        assert_eq!(
            extract("```\n\nfoo\nbar\n```"),
            vec![Segment::code("foo", "bar")]
        );
    }

    #[test]
    fn test_blank_lines_around_fenced_body() {
        let segments = extract("```  \n  \nx\n```");
        assert_eq!(segments, Vec::<Segment>::new());
        let segments = extract("```Rust\n\nlet x = 1;\n```");
        assert_eq!(segments, vec![Segment::code("rust", "let x = 1;")]);
        assert_eq!(segments[0].language(), Some("rust"));
    }

    #[test]
    fn test_adjacent_fences_produce_no_empty_text() {
        let segments = extract("```a\n1\n``````b\n2\n```");
        assert_eq!(
            segments,
            vec![Segment::code("a", "1"), Segment::code("b", "2")]
        );
    }

    #[test]
    fn test_inline_fence_on_one_line_is_dropped() {
        let segments = extract("use ```x``` here");
        assert_eq!(segments, vec![Segment::text("use"), Segment::text("here")]);
    }

    #[test]
    fn test_code_body_is_trimmed() {
        let segments = extract("```py\n\n    x = 1\n\n```");
        assert_eq!(segments, vec![Segment::code("py", "x = 1")]);
    }

    #[test]
    fn test_segment_accessors() {
        let text = Segment::text("hi");
        assert_eq!(text.kind(), SegmentKind::Text);
        assert_eq!(text.content(), "hi");
        assert!(text.language().is_none());

        let code = Segment::code("rust", "let x = 1;");
        assert_eq!(code.kind(), SegmentKind::Code);
        assert_eq!(code.language(), Some("rust"));
    }

    #[test]
    fn test_segment_serialization() {
        let json = serde_json::to_string(&Segment::code("python", "print(1)")).unwrap();
        assert_eq!(
            json,
            r#"{"type":"code","language":"python","content":"print(1)"}"#
        );
        let json = serde_json::to_string(&Segment::text("hi")).unwrap();
        assert_eq!(json, r#"{"type":"text","content":"hi"}"#);
    }
}
