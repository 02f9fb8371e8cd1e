use crate::app::{App, Message, Model};
use crate::editor::Direction;
use crate::input::{BACKSPACE, ENTER, Key, ctrl};

impl App {
    /// Translate a decoded key into a [`Message`] for the current mode.
    pub(super) fn handle_key(key: Key, model: &Model) -> Message {
        if model.is_prompting() {
            return Message::PromptKey(key);
        }
        match key {
            Key::Byte(ENTER) => Message::InsertNewline,
            Key::Byte(b) if b == ctrl(b'q') => Message::Quit,
            Key::Byte(b) if b == ctrl(b's') => Message::Save,
            Key::Byte(b) if b == ctrl(b'f') => Message::Find,
            Key::Byte(b) if b == BACKSPACE || b == ctrl(b'h') => Message::DeleteBack,
            Key::Byte(b) if b == ctrl(b'l') => Message::Redraw,
            Key::Byte(b) => Message::InsertChar(b),
            Key::Delete => Message::DeleteForward,
            Key::ArrowUp => Message::MoveCursor(Direction::Up),
            Key::ArrowDown => Message::MoveCursor(Direction::Down),
            Key::ArrowLeft => Message::MoveCursor(Direction::Left),
            Key::ArrowRight => Message::MoveCursor(Direction::Right),
            Key::Home => Message::MoveHome,
            Key::End => Message::MoveEnd,
            Key::PageUp => Message::PageUp,
            Key::PageDown => Message::PageDown,
            Key::Escape => Message::Redraw,
        }
    }
}
