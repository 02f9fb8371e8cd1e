use std::time::Instant;

use crate::editor::{Direction, Position};
use crate::input::{ENTER, Key};

use super::model::{Mode, Model};
use super::prompt::{LineEvent, Prompt, PromptKind};

/// All possible actions in an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a byte at the cursor
    InsertChar(u8),
    /// Break the line at the cursor (Enter)
    InsertNewline,
    /// Delete the character before the cursor (Backspace)
    DeleteBack,
    /// Delete the character under the cursor (Delete)
    DeleteForward,

    // Navigation
    /// Move the cursor one step
    MoveCursor(Direction),
    /// Start of line (Home)
    MoveHome,
    /// End of line (End)
    MoveEnd,
    /// Previous screen
    PageUp,
    /// Next screen
    PageDown,

    // Commands
    /// Save, asking for a file name first if there is none
    Save,
    /// Open the search prompt
    Find,
    /// Quit, asking for confirmation while there are unsaved changes
    Quit,
    /// Repaint without changing anything
    Redraw,

    /// A key typed while a prompt is open
    PromptKey(Key),
}

/// Apply one message to the model.
///
/// File writes are not done here: a save only sets a request flag that
/// the effects pass picks up.
pub fn update(mut model: Model, msg: Message, now: Instant) -> Model {
    if msg != Message::Quit {
        model.reset_quit_counter();
    }

    match msg {
        Message::InsertChar(byte) => {
            let Position { row, col } = model.cursor;
            model.buffer.insert_char(row, col, byte);
            model.cursor.col += 1;
        }
        Message::InsertNewline => {
            let Position { row, col } = model.cursor;
            model.buffer.insert_newline(row, col);
            model.cursor = Position::new(row + 1, 0);
        }
        Message::DeleteBack => delete_back(&mut model),
        Message::DeleteForward => {
            model.move_cursor(Direction::Right);
            delete_back(&mut model);
        }
        Message::MoveCursor(direction) => model.move_cursor(direction),
        Message::MoveHome => model.move_home(),
        Message::MoveEnd => model.move_end(),
        Message::PageUp => model.page_up(),
        Message::PageDown => model.page_down(),
        Message::Save => {
            if model.buffer.file_path().is_some() {
                model.save_requested = true;
            } else {
                tracing::debug!("opening save-as prompt");
                model.mode = Mode::Prompt(Prompt::save_as());
            }
        }
        Message::Find => {
            tracing::debug!("opening search prompt");
            let saved = model.snapshot();
            model.mode = Mode::Prompt(Prompt::search(saved));
        }
        Message::Quit => quit(&mut model, now),
        Message::Redraw => {}
        Message::PromptKey(key) => prompt_key(&mut model, key, now),
    }
    model
}

fn delete_back(model: &mut Model) {
    if let Some(pos) = model.buffer.delete_char(model.cursor.row, model.cursor.col) {
        model.cursor = pos;
    }
}

fn quit(model: &mut Model, now: Instant) {
    if !model.buffer.is_dirty() || model.consume_quit() {
        model.should_quit = true;
        return;
    }
    let remaining = model.quit_remaining();
    tracing::info!(remaining, "quit requested with unsaved changes");
    model.set_status(
        format!(
            "WARNING!!! File has unsaved changes. Press Ctrl-Q {remaining} more times to quit."
        ),
        now,
    );
}

fn prompt_key(model: &mut Model, key: Key, now: Instant) {
    let Mode::Prompt(mut prompt) = std::mem::take(&mut model.mode) else {
        return;
    };
    let event = prompt.input.handle(key);

    match &mut prompt.kind {
        PromptKind::SaveAs => match event {
            LineEvent::Submitted => {
                model.buffer.set_file_path(prompt.input.text());
                model.save_requested = true;
                model.clear_status();
                return;
            }
            LineEvent::Cancelled => {
                model.set_status("Save aborted", now);
                return;
            }
            LineEvent::Edited | LineEvent::Unchanged => {}
        },
        PromptKind::Search { engine, saved } => {
            if key == Key::Byte(ENTER) && prompt.input.text().is_empty() {
                engine.reset();
                model.restore(*saved);
                model.set_status("Empty query", now);
                return;
            }
            let query = prompt.input.text().as_bytes();
            if let Some(found) = engine.advance(model.buffer.rows(), query, key) {
                model.cursor = found;
                model.viewport.pin_top(found.row);
            }
            match event {
                LineEvent::Submitted => {
                    model.clear_status();
                    return;
                }
                LineEvent::Cancelled => {
                    model.restore(*saved);
                    model.set_status("Search cancelled", now);
                    return;
                }
                LineEvent::Edited | LineEvent::Unchanged => {}
            }
        }
    }
    model.mode = Mode::Prompt(prompt);
}
