use std::time::Instant;

use crate::config::EditorOptions;
use crate::editor::{Direction, Position, TextBuffer};
use crate::ui::viewport::Viewport;

use super::prompt::Prompt;

/// Message shown in the bottom bar, stamped with when it was set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

/// What keystrokes currently drive.
#[derive(Debug, Clone, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// A single-line prompt owns the keyboard (save-as or search).
    Prompt(Prompt),
}

/// Cursor and scroll state captured when a search opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub cursor: Position,
    pub row_offset: usize,
    pub col_offset: usize,
}

/// The complete session state.
///
/// All state lives here - the event loop owns one `Model` and passes it
/// through [`update`](super::update).
#[derive(Debug, Clone)]
pub struct Model {
    /// The text being edited
    pub buffer: TextBuffer,
    /// Logical cursor; `row` may be the virtual line after the last row
    pub cursor: Position,
    /// Render column of the cursor, recomputed by [`Model::scroll`]
    pub render_col: usize,
    /// Visible window over the text
    pub viewport: Viewport,
    /// Normal editing or an open prompt
    pub mode: Mode,
    /// Session tunables
    pub options: EditorOptions,
    /// Set once the session should end
    pub should_quit: bool,
    /// Set when a write to disk is due; consumed by the effects pass
    pub(super) save_requested: bool,
    status: Option<StatusMessage>,
    quit_remaining: u8,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(TextBuffer::empty(), Viewport::new(0, 0), EditorOptions::default())
    }
}

impl Model {
    pub fn new(buffer: TextBuffer, viewport: Viewport, options: EditorOptions) -> Self {
        Self {
            buffer,
            cursor: Position::new(0, 0),
            render_col: 0,
            viewport,
            mode: Mode::Normal,
            options,
            should_quit: false,
            save_requested: false,
            status: None,
            quit_remaining: options.quit_times,
        }
    }

    /// Replace the status message.
    pub fn set_status(&mut self, text: impl Into<String>, now: Instant) {
        self.status = Some(StatusMessage {
            text: text.into(),
            set_at: now,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// The status text if it is younger than the message timeout.
    pub fn active_status(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|msg| now.saturating_duration_since(msg.set_at) < self.options.message_timeout)
            .map(|msg| msg.text.as_str())
    }

    /// Quit presses still needed before unsaved changes are dropped.
    pub const fn quit_remaining(&self) -> u8 {
        self.quit_remaining
    }

    pub(super) const fn reset_quit_counter(&mut self) {
        self.quit_remaining = self.options.quit_times;
    }

    /// Count one quit press; true when it is the last one needed.
    pub(super) const fn consume_quit(&mut self) -> bool {
        self.quit_remaining = self.quit_remaining.saturating_sub(1);
        self.quit_remaining == 0
    }

    pub const fn is_prompting(&self) -> bool {
        matches!(self.mode, Mode::Prompt(_))
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        match &self.mode {
            Mode::Prompt(prompt) => Some(prompt),
            Mode::Normal => None,
        }
    }

    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            cursor: self.cursor,
            row_offset: self.viewport.row_offset(),
            col_offset: self.viewport.col_offset(),
        }
    }

    pub const fn restore(&mut self, snapshot: Snapshot) {
        self.cursor = snapshot.cursor;
        self.viewport.restore(snapshot.row_offset, snapshot.col_offset);
    }

    /// Recompute the render column and bring the cursor into view.
    pub fn scroll(&mut self) {
        self.render_col = self
            .buffer
            .row(self.cursor.row)
            .map_or(0, |row| row.cx_to_rx(self.cursor.col));
        self.viewport.scroll_to(self.cursor.row, self.render_col);
    }

    /// Move the cursor one step, wrapping across line ends.
    pub fn move_cursor(&mut self, direction: Direction) {
        let rows = self.buffer.row_count();
        let row_len = self.buffer.row_len(self.cursor.row);
        match direction {
            Direction::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                } else if self.cursor.row > 0 {
                    self.cursor.row -= 1;
                    self.cursor.col = self.buffer.row_len(self.cursor.row);
                }
            }
            Direction::Right => {
                if self.cursor.row < rows {
                    if self.cursor.col < row_len {
                        self.cursor.col += 1;
                    } else {
                        self.cursor.row += 1;
                        self.cursor.col = 0;
                    }
                }
            }
            Direction::Up => self.cursor.row = self.cursor.row.saturating_sub(1),
            Direction::Down => {
                if self.cursor.row < rows {
                    self.cursor.row += 1;
                }
            }
        }
        self.clamp_col();
    }

    pub const fn move_home(&mut self) {
        self.cursor.col = 0;
    }

    /// End of the current row; stays put on the virtual line.
    pub fn move_end(&mut self) {
        if self.cursor.row < self.buffer.row_count() {
            self.cursor.col = self.buffer.row_len(self.cursor.row);
        }
    }

    /// Page Up: jump to the top screen row, then up one screen.
    pub fn page_up(&mut self) {
        self.cursor.row = self.viewport.row_offset();
        for _ in 0..self.viewport.height() {
            self.move_cursor(Direction::Up);
        }
    }

    /// Page Down: jump to the bottom screen row (clamped to the row
    /// count), then down one screen.
    pub fn page_down(&mut self) {
        self.cursor.row = (self.viewport.row_offset() + self.viewport.height())
            .saturating_sub(1)
            .min(self.buffer.row_count());
        for _ in 0..self.viewport.height() {
            self.move_cursor(Direction::Down);
        }
    }

    fn clamp_col(&mut self) {
        self.cursor.col = self.cursor.col.min(self.buffer.row_len(self.cursor.row));
    }
}
