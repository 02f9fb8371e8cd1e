//! Text storage for the editor.
//!
//! A [`TextBuffer`] is a list of [`Row`]s; each row keeps the bytes as
//! typed and a render form with tabs expanded. Cursor handling lives in
//! the session, the buffer only exposes position-addressed edits.

mod buffer;
pub mod file;
mod row;

pub use buffer::TextBuffer;
pub use row::{Row, TAB_STOP};

/// A logical position in a [`TextBuffer`].
///
/// `row` may equal the row count (the virtual line after the last row).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
