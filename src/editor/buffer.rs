use std::path::{Path, PathBuf};

use super::{Position, Row};

/// An ordered sequence of [`Row`]s with dirty tracking.
///
/// Row index `row_count()` is the virtual empty line past the end of the
/// file; inserting there appends a row. Requests outside `0..=row_count()`
/// are ignored.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rows: Vec<Row>,
    dirty: usize,
    file_path: Option<PathBuf>,
}

impl TextBuffer {
    /// Create an empty buffer with no file behind it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a clean buffer from already split lines.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            rows: lines.into_iter().map(Row::new).collect(),
            dirty: 0,
            file_path: None,
        }
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn set_file_path(&mut self, path: impl Into<PathBuf>) {
        self.file_path = Some(path.into());
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    /// Logical length of a row; zero for the virtual line.
    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map_or(0, Row::len)
    }

    /// Whether there are unsaved changes.
    pub const fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Number of mutations since load or the last save.
    pub const fn dirty(&self) -> usize {
        self.dirty
    }

    pub const fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    /// Insert a row holding `content` before index `at`.
    pub fn insert_row(&mut self, at: usize, content: impl Into<Vec<u8>>) {
        debug_assert!(at <= self.rows.len(), "insert_row {at} out of range");
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(content));
        self.dirty += 1;
    }

    pub fn delete_row(&mut self, at: usize) {
        debug_assert!(at < self.rows.len(), "delete_row {at} out of range");
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.dirty += 1;
    }

    /// Insert `byte` at `(row, col)`, appending a row first when `row` is
    /// the virtual line. Columns past the row end are clamped to it.
    pub fn insert_char(&mut self, row: usize, col: usize, byte: u8) {
        debug_assert!(row <= self.rows.len(), "insert_char row {row} out of range");
        if row == self.rows.len() {
            self.insert_row(row, Vec::new());
        }
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        target.insert(col, byte);
        self.dirty += 1;
    }

    /// Delete the character before `(row, col)` (Backspace).
    ///
    /// At column 0 the row is joined onto the previous one. Returns where
    /// the cursor belongs afterwards, or `None` if nothing changed.
    pub fn delete_char(&mut self, row: usize, col: usize) -> Option<Position> {
        debug_assert!(row <= self.rows.len(), "delete_char row {row} out of range");
        if row >= self.rows.len() || (row == 0 && col == 0) {
            return None;
        }
        if col > 0 {
            let col = col.min(self.rows[row].len());
            self.rows[row].remove(col - 1)?;
            self.dirty += 1;
            return Some(Position::new(row, col - 1));
        }

        let joined_at = self.rows[row - 1].len();
        let moved = self.rows[row].raw().to_vec();
        self.rows[row - 1].append(&moved);
        self.delete_row(row);
        Some(Position::new(row - 1, joined_at))
    }

    /// Break the line at `(row, col)` (Enter).
    ///
    /// At column 0 an empty row is inserted above; otherwise the suffix
    /// moves to a new row below.
    pub fn insert_newline(&mut self, row: usize, col: usize) {
        debug_assert!(row <= self.rows.len(), "insert_newline row {row} out of range");
        if col == 0 {
            self.insert_row(row, Vec::new());
            return;
        }
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        let tail = target.split_off(col);
        self.insert_row(row + 1, tail);
    }

    /// File content: every row followed by a single `\n`.
    pub fn serialize(&self) -> Vec<u8> {
        let len = self.rows.iter().map(|row| row.len() + 1).sum();
        let mut out = Vec::with_capacity(len);
        for row in &self.rows {
            out.extend_from_slice(row.raw());
            out.push(b'\n');
        }
        out
    }
}
