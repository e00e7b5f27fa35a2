//! Editable code buffer behind a code view.

use std::ops::Range;

use crate::utils::CODE_VIEW_MAX_LINES;

/// Byte offset of char index `col` in `line` (end of line when past it).
fn byte_at(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Code lines with a cursor and a vertical scroll offset.
///
/// The cursor column is a char index. The view shows at most
/// [CODE_VIEW_MAX_LINES] lines and keeps the cursor row inside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeView {
    language: String,
    lines: Vec<String>,
    row: usize,
    col: usize,
    scroll: usize,
    edited: bool,
}

impl CodeView {
    pub fn new(language: impl Into<String>, content: &str) -> Self {
        let lines = content
            .split('\n')
            .map(|l| l.trim_end_matches('\r').to_string())
            .collect();
        Self {
            language: language.into(),
            lines,
            row: 0,
            col: 0,
            scroll: 0,
            edited: false,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// `(row, col)`; col is a char index.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Rows the view occupies on screen (without borders).
    pub fn visible_height(&self) -> usize {
        self.lines.len().clamp(1, CODE_VIEW_MAX_LINES)
    }

    /// Line indices currently on screen.
    pub fn visible_rows(&self) -> Range<usize> {
        let end = (self.scroll + self.visible_height()).min(self.lines.len());
        self.scroll..end
    }

    /// Scroll the view without moving the cursor past the content.
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.lines.len().saturating_sub(self.visible_height());
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
        self.row = self.row.clamp(self.scroll, self.scroll + self.visible_height() - 1);
        self.clamp_col();
    }

    pub fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.row];
        let at = byte_at(line, self.col);
        line.insert(at, c);
        self.col += 1;
        self.edited = true;
    }

    /// Split the current line at the cursor.
    pub fn newline(&mut self) {
        let line = &mut self.lines[self.row];
        let at = byte_at(line, self.col);
        let rest = line.split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
        self.edited = true;
        self.follow_cursor();
    }

    /// Delete the char before the cursor, joining with the previous line at column 0.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let start = byte_at(line, self.col - 1);
            let end = byte_at(line, self.col);
            line.drain(start..end);
            self.col -= 1;
            self.edited = true;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&current);
            self.edited = true;
            self.follow_cursor();
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.follow_cursor();
        }
    }

    pub fn move_right(&mut self) {
        if self.col < char_len(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
            self.follow_cursor();
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.clamp_col();
            self.follow_cursor();
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.clamp_col();
            self.follow_cursor();
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = char_len(&self.lines[self.row]);
    }

    fn clamp_col(&mut self) {
        self.col = self.col.min(char_len(&self.lines[self.row]));
    }

    fn follow_cursor(&mut self) {
        let height = self.visible_height();
        if self.row < self.scroll {
            self.scroll = self.row;
        } else if self.row >= self.scroll + height {
            self.scroll = self.row + 1 - height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_splits_lines() {
        let view = CodeView::new("python", "a = 1\nb = 2");
        assert_eq!(view.lines(), &["a = 1", "b = 2"]);
        assert_eq!(view.language(), "python");
        assert_eq!(view.visible_height(), 2);
        assert!(!view.is_edited());
    }

    #[test]
    fn empty_content_has_one_line() {
        let view = CodeView::new("", "");
        assert_eq!(view.lines().len(), 1);
        assert_eq!(view.visible_height(), 1);
    }

    #[test]
    fn insert_and_newline() {
        let mut view = CodeView::new("", "ab");
        view.move_right();
        view.insert_char('X');
        assert_eq!(view.text(), "aXb");
        view.newline();
        assert_eq!(view.text(), "aX\nb");
        assert_eq!(view.cursor(), (1, 0));
        assert!(view.is_edited());
    }

    #[test]
    fn backspace_joins_lines() {
        let mut view = CodeView::new("", "ab\ncd");
        view.move_down();
        view.backspace();
        assert_eq!(view.text(), "abcd");
        assert_eq!(view.cursor(), (0, 2));
        view.backspace();
        assert_eq!(view.text(), "acd");
    }

    #[test]
    fn backspace_at_origin_is_noop() {
        let mut view = CodeView::new("", "ab");
        view.backspace();
        assert_eq!(view.text(), "ab");
        assert!(!view.is_edited());
    }

    #[test]
    fn multibyte_editing() {
        let mut view = CodeView::new("", "é");
        view.move_end();
        view.insert_char('你');
        assert_eq!(view.text(), "é你");
        view.move_left();
        view.backspace();
        assert_eq!(view.text(), "你");
    }

    #[test]
    fn vertical_moves_clamp_column() {
        let mut view = CodeView::new("", "long line\nab");
        view.move_end();
        view.move_down();
        assert_eq!(view.cursor(), (1, 2));
        view.move_up();
        assert_eq!(view.cursor(), (0, 2));
    }

    #[test]
    fn horizontal_moves_wrap_between_lines() {
        let mut view = CodeView::new("", "ab\ncd");
        view.move_end();
        view.move_right();
        assert_eq!(view.cursor(), (1, 0));
        view.move_left();
        assert_eq!(view.cursor(), (0, 2));
    }

    #[test]
    fn scroll_follows_cursor() {
        let content: Vec<String> = (0..30).map(|i| format!("line {i}")).collect();
        let mut view = CodeView::new("", &content.join("\n"));
        assert_eq!(view.visible_height(), CODE_VIEW_MAX_LINES);
        for _ in 0..CODE_VIEW_MAX_LINES {
            view.move_down();
        }
        assert_eq!(view.visible_rows(), 1..CODE_VIEW_MAX_LINES + 1);
        for _ in 0..CODE_VIEW_MAX_LINES {
            view.move_up();
        }
        assert_eq!(view.visible_rows().start, 0);
    }

    #[test]
    fn scroll_by_keeps_cursor_on_screen() {
        let content: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        let mut view = CodeView::new("", &content.join("\n"));
        view.scroll_by(100);
        assert_eq!(view.visible_rows(), 30 - CODE_VIEW_MAX_LINES..30);
        assert!(view.visible_rows().contains(&view.cursor().0));
        view.scroll_by(-100);
        assert_eq!(view.visible_rows().start, 0);
    }
}
