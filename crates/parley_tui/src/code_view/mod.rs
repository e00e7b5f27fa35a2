//! Editable code views for fenced code segments.
//!
//! Every code segment shown in the chat gets a [CodeView], keyed by
//! [WidgetKey] so edits survive re-renders.

mod editor;
mod highlight;
mod render;

pub use editor::CodeView;
pub use highlight::highlight_code_line;
pub use render::{code_view_lines, PLAIN_LABEL};

/// Identity of a code view: the message's store index and the segment's index within it.
///
/// Ordered by message, then segment, so iterating a `BTreeMap<WidgetKey, _>`
/// visits views top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetKey {
    pub message: usize,
    pub segment: usize,
}

impl WidgetKey {
    pub fn new(message: usize, segment: usize) -> Self {
        Self { message, segment }
    }
}

impl std::fmt::Display for WidgetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "code_{}_{}", self.message, self.segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_order_top_to_bottom() {
        let mut keys = vec![WidgetKey::new(3, 0), WidgetKey::new(1, 2), WidgetKey::new(1, 0)];
        keys.sort();
        assert_eq!(keys, vec![WidgetKey::new(1, 0), WidgetKey::new(1, 2), WidgetKey::new(3, 0)]);
    }

    #[test]
    fn key_display_is_stable() {
        assert_eq!(WidgetKey::new(4, 1).to_string(), "code_4_1");
    }
}
