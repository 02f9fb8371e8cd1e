//! Single-line prompts.
//!
//! [`LineInput`] collects one line of text from keystrokes. A [`Prompt`]
//! pairs it with what the line is for: a file name to save as, or an
//! incremental search that reacts to every keystroke.

use crate::input::{BACKSPACE, ENTER, Key, ctrl};
use crate::search::SearchEngine;

use super::model::Snapshot;

/// Outcome of feeding one key to a [`LineInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// Text changed.
    Edited,
    /// Key did not touch the text (arrows, control keys, empty Enter).
    Unchanged,
    /// Enter on non-empty text.
    Submitted,
    /// Escape.
    Cancelled,
}

/// Line editor used by every prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    text: String,
}

impl LineInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn handle(&mut self, key: Key) -> LineEvent {
        match key {
            Key::Escape => LineEvent::Cancelled,
            Key::Byte(ENTER) if !self.text.is_empty() => LineEvent::Submitted,
            Key::Delete | Key::Byte(BACKSPACE) => self.pop(),
            Key::Byte(b) if b == ctrl(b'h') => self.pop(),
            _ => match key.printable() {
                Some(byte) => {
                    self.text.push(char::from(byte));
                    LineEvent::Edited
                }
                None => LineEvent::Unchanged,
            },
        }
    }

    fn pop(&mut self) -> LineEvent {
        if self.text.pop().is_some() {
            LineEvent::Edited
        } else {
            LineEvent::Unchanged
        }
    }
}

/// What an open prompt is collecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    /// Incremental search; `saved` is restored if the search is cancelled.
    Search {
        engine: SearchEngine,
        saved: Snapshot,
    },
}

/// An open prompt: its purpose plus the text typed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: LineInput,
}

impl Prompt {
    pub fn save_as() -> Self {
        Self {
            kind: PromptKind::SaveAs,
            input: LineInput::default(),
        }
    }

    pub fn search(saved: Snapshot) -> Self {
        Self {
            kind: PromptKind::Search {
                engine: SearchEngine::new(),
                saved,
            },
            input: LineInput::default(),
        }
    }

    /// Text shown in the message bar while the prompt is open.
    pub fn label(&self) -> String {
        match self.kind {
            PromptKind::SaveAs => format!("Save as: {} (ESC to cancel)", self.input.text()),
            PromptKind::Search { .. } => {
                format!("Search: {} (Use ESC/Arrows/Enter)", self.input.text())
            }
        }
    }
}
