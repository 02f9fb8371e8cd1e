//! Incremental search.
//!
//! [`SearchEngine`] is fed the query and the last key after every
//! keystroke of the search prompt. Arrow keys step to the next or
//! previous matching row, any edit restarts the scan from the top, and
//! the scan wraps around the ends of the buffer.

use crate::editor::{Position, Row};
use crate::input::{ENTER, Key};

/// Scan direction over the rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// Search state for one open search prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchEngine {
    last_match: Option<usize>,
    direction: SearchDirection,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row of the most recent match, if any.
    pub const fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub const fn direction(&self) -> SearchDirection {
        self.direction
    }

    /// Drop the last match and go back to scanning forward.
    pub const fn reset(&mut self) {
        self.last_match = None;
        self.direction = SearchDirection::Forward;
    }

    /// React to one prompt keystroke and look for the next match.
    ///
    /// Enter and Escape end the session: state is cleared and nothing is
    /// scanned. The returned position is in logical columns.
    pub fn advance(&mut self, rows: &[Row], query: &[u8], key: Key) -> Option<Position> {
        match key {
            Key::Byte(ENTER) | Key::Escape => {
                self.reset();
                return None;
            }
            Key::ArrowRight | Key::ArrowDown => self.direction = SearchDirection::Forward,
            Key::ArrowLeft | Key::ArrowUp => self.direction = SearchDirection::Backward,
            _ => self.reset(),
        }
        if self.last_match.is_none() {
            self.direction = SearchDirection::Forward;
        }
        if query.is_empty() || rows.is_empty() {
            return None;
        }

        let count = rows.len();
        let mut current = self.last_match;
        for _ in 0..count {
            let next = match (current, self.direction) {
                (None, _) => 0,
                (Some(at), SearchDirection::Forward) => (at + 1) % count,
                (Some(0), SearchDirection::Backward) => count - 1,
                (Some(at), SearchDirection::Backward) => at - 1,
            };
            current = Some(next);
            let row = &rows[next];
            if let Some(rx) = find(row.render(), query) {
                self.last_match = Some(next);
                return Some(Position::new(next, row.rx_to_cx(rx)));
            }
        }
        None
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<Row> {
        lines.iter().map(|l| Row::new(*l)).collect()
    }

    #[test]
    fn test_typing_finds_first_match() {
        let rows = rows(&["alpha", "beta", "gamma"]);
        let mut engine = SearchEngine::new();
        assert_eq!(
            engine.advance(&rows, b"mm", Key::Byte(b'm')),
            Some(Position::new(2, 2))
        );
        assert_eq!(engine.last_match(), Some(2));
    }

    #[test]
    fn test_forward_search_wraps_around() {
        let rows = rows(&["foo", "bar", "foo"]);
        let mut engine = SearchEngine::new();
        let first = engine.advance(&rows, b"foo", Key::Byte(b'o'));
        assert_eq!(first.map(|p| p.row), Some(0));
        let second = engine.advance(&rows, b"foo", Key::ArrowDown);
        assert_eq!(second.map(|p| p.row), Some(2));
        let third = engine.advance(&rows, b"foo", Key::ArrowRight);
        assert_eq!(third.map(|p| p.row), Some(0));
    }

    #[test]
    fn test_backward_search_wraps_to_end() {
        let rows = rows(&["foo", "bar", "foo", "baz"]);
        let mut engine = SearchEngine::new();
        engine.advance(&rows, b"foo", Key::Byte(b'o'));
        let prev = engine.advance(&rows, b"foo", Key::ArrowUp);
        assert_eq!(prev.map(|p| p.row), Some(2));
        assert_eq!(engine.direction(), SearchDirection::Backward);
        let prev = engine.advance(&rows, b"foo", Key::ArrowLeft);
        assert_eq!(prev.map(|p| p.row), Some(0));
    }

    #[test]
    fn test_backward_without_match_scans_forward() {
        let rows = rows(&["x", "foo"]);
        let mut engine = SearchEngine::new();
        let found = engine.advance(&rows, b"foo", Key::ArrowUp);
        assert_eq!(found, Some(Position::new(1, 0)));
        assert_eq!(engine.direction(), SearchDirection::Forward);
    }

    #[test]
    fn test_edit_restarts_from_top() {
        let rows = rows(&["foo", "foo"]);
        let mut engine = SearchEngine::new();
        engine.advance(&rows, b"foo", Key::Byte(b'o'));
        engine.advance(&rows, b"foo", Key::ArrowDown);
        assert_eq!(engine.last_match(), Some(1));
        let again = engine.advance(&rows, b"fo", Key::Byte(127));
        assert_eq!(again.map(|p| p.row), Some(0));
    }

    #[test]
    fn test_no_match_returns_none_and_keeps_state_clear() {
        let rows = rows(&["foo"]);
        let mut engine = SearchEngine::new();
        assert_eq!(engine.advance(&rows, b"zzz", Key::Byte(b'z')), None);
        assert_eq!(engine.last_match(), None);
    }

    #[test]
    fn test_enter_and_escape_reset_without_scanning() {
        let rows = rows(&["foo"]);
        let mut engine = SearchEngine::new();
        engine.advance(&rows, b"foo", Key::Byte(b'o'));
        assert_eq!(engine.advance(&rows, b"foo", Key::Byte(ENTER)), None);
        assert_eq!(engine, SearchEngine::new());
        engine.advance(&rows, b"foo", Key::Byte(b'o'));
        assert_eq!(engine.advance(&rows, b"foo", Key::Escape), None);
        assert_eq!(engine, SearchEngine::new());
    }

    #[test]
    fn test_match_column_maps_through_tabs() {
        let rows = rows(&["\tneedle"]);
        let mut engine = SearchEngine::new();
        let found = engine.advance(&rows, b"needle", Key::Byte(b'e'));
        assert_eq!(found, Some(Position::new(0, 1)));
    }

    #[test]
    fn test_empty_query_does_not_move() {
        let rows = rows(&["foo"]);
        let mut engine = SearchEngine::new();
        assert_eq!(engine.advance(&rows, b"", Key::Byte(127)), None);
    }

    #[test]
    fn test_single_match_repeats_on_itself() {
        let rows = rows(&["a", "foo", "b"]);
        let mut engine = SearchEngine::new();
        engine.advance(&rows, b"foo", Key::Byte(b'o'));
        let again = engine.advance(&rows, b"foo", Key::ArrowDown);
        assert_eq!(again.map(|p| p.row), Some(1));
    }
}
