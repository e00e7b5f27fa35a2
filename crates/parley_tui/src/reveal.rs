//! Timed word-by-word reveal of the live reply.
//!
//! Advanced by the event loop calling [Reveal::tick] with the current time;
//! nothing here sleeps.

use std::time::{Duration, Instant};

use parley_core::Segment;

/// One word per interval.
pub const WORD_INTERVAL: Duration = Duration::from_millis(20);

/// How much of a segment is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    /// First n words of a text segment, drawn with the reveal cursor.
    Words(usize),
    Full,
}

/// Reveal progress for the message at store index `message`.
#[derive(Debug, Clone)]
pub struct Reveal {
    message: usize,
    /// Word count per segment; `None` for code, which appears whole.
    words: Vec<Option<usize>>,
    segment: usize,
    shown: usize,
    last_step: Instant,
}

impl Reveal {
    pub fn new(message: usize, segments: &[Segment], now: Instant) -> Self {
        let words = segments
            .iter()
            .map(|s| match s {
                Segment::Text { content } => Some(content.split_whitespace().count()),
                Segment::Code { .. } => None,
            })
            .collect();
        let mut reveal = Self {
            message,
            words,
            segment: 0,
            shown: 0,
            last_step: now,
        };
        reveal.skip_empty();
        reveal
    }

    pub fn message(&self) -> usize {
        self.message
    }

    pub fn is_done(&self) -> bool {
        self.segment >= self.words.len()
    }

    /// Advance by the whole intervals elapsed since the last step. Returns true when
    /// anything new became visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_done() {
            return false;
        }
        let elapsed = now.saturating_duration_since(self.last_step);
        let steps = elapsed.as_millis() / WORD_INTERVAL.as_millis();
        if steps == 0 {
            return false;
        }
        self.last_step += WORD_INTERVAL * steps as u32;
        for _ in 0..steps {
            if !self.step() {
                break;
            }
        }
        true
    }

    /// Show everything at once.
    pub fn finish(&mut self) {
        self.segment = self.words.len();
        self.shown = 0;
    }

    pub fn visibility(&self, segment: usize) -> Visibility {
        if segment < self.segment {
            return Visibility::Full;
        }
        if segment > self.segment {
            return Visibility::Hidden;
        }
        match self.words.get(segment) {
            Some(Some(_)) => Visibility::Words(self.shown),
            Some(None) => Visibility::Full,
            None => Visibility::Hidden,
        }
    }

    fn step(&mut self) -> bool {
        match self.words.get(self.segment) {
            None => return false,
            Some(Some(total)) if self.shown + 1 < *total => self.shown += 1,
            Some(_) => {
                self.segment += 1;
                self.shown = 0;
                self.skip_empty();
            }
        }
        true
    }

    /// Empty text segments have nothing to reveal.
    fn skip_empty(&mut self) {
        while let Some(Some(0)) = self.words.get(self.segment) {
            self.segment += 1;
        }
    }
}

/// The first `n` words of `text`, joined by single spaces.
pub fn first_words(text: &str, n: usize) -> String {
    text.split_whitespace().take(n).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn text_advances_one_word_per_interval() {
        let start = Instant::now();
        let segments = vec![Segment::text("one two three four")];
        let mut reveal = Reveal::new(0, &segments, start);
        assert_eq!(reveal.visibility(0), Visibility::Words(0));

        assert!(!reveal.tick(start + ms(19)));
        assert!(reveal.tick(start + ms(20)));
        assert_eq!(reveal.visibility(0), Visibility::Words(1));

        assert!(reveal.tick(start + ms(60)));
        assert_eq!(reveal.visibility(0), Visibility::Words(3));
        assert!(!reveal.is_done());

        reveal.tick(start + ms(80));
        assert!(reveal.is_done());
        assert_eq!(reveal.visibility(0), Visibility::Full);
    }

    #[test]
    fn code_appears_whole_when_reached() {
        let start = Instant::now();
        let segments = vec![
            Segment::text("a b"),
            Segment::code("python", "print(1)\nprint(2)"),
            Segment::text("c"),
        ];
        let mut reveal = Reveal::new(7, &segments, start);
        assert_eq!(reveal.message(), 7);
        assert_eq!(reveal.visibility(1), Visibility::Hidden);

        // "a" -> "a b" -> code reached
        reveal.tick(start + ms(40));
        assert_eq!(reveal.visibility(0), Visibility::Full);
        assert_eq!(reveal.visibility(1), Visibility::Full);
        assert_eq!(reveal.visibility(2), Visibility::Hidden);

        reveal.tick(start + ms(60));
        assert_eq!(reveal.visibility(2), Visibility::Words(0));
        reveal.tick(start + ms(80));
        assert!(reveal.is_done());
    }

    #[test]
    fn leading_code_is_visible_immediately() {
        let start = Instant::now();
        let reveal = Reveal::new(0, &[Segment::code("json", "{}")], start);
        assert_eq!(reveal.visibility(0), Visibility::Full);
    }

    #[test]
    fn empty_text_is_skipped() {
        let reveal = Reveal::new(0, &[Segment::text("")], Instant::now());
        assert!(reveal.is_done());
    }

    #[test]
    fn finish_shows_everything() {
        let segments = vec![Segment::text("a b c"), Segment::text("d")];
        let mut reveal = Reveal::new(0, &segments, Instant::now());
        reveal.finish();
        assert!(reveal.is_done());
        assert_eq!(reveal.visibility(1), Visibility::Full);
    }

    #[test]
    fn late_tick_catches_up() {
        let start = Instant::now();
        let segments = vec![Segment::text("a b c d e f")];
        let mut reveal = Reveal::new(0, &segments, start);
        reveal.tick(start + ms(1000));
        assert!(reveal.is_done());
    }

    #[test]
    fn first_words_joins_with_spaces() {
        assert_eq!(first_words("a  b\nc d", 3), "a b c");
        assert_eq!(first_words("a b", 0), "");
    }
}
