//! Editing session and main loop.
//!
//! Follows a model/update/effects split:
//! - [`Model`]: the complete session state
//! - [`Message`]: every action a key can trigger
//! - [`update`]: applies a message to the model
//! - [`App::run`]: decode a key, update, do I/O, draw a frame

mod effects;
mod event_loop;
mod input;
mod model;
mod prompt;
mod update;

pub use model::{Mode, Model, Snapshot, StatusMessage};
pub use prompt::{LineEvent, LineInput, Prompt, PromptKind};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::EditorOptions;

/// Owns the startup settings and runs the terminal session.
#[derive(Debug, Clone)]
pub struct App {
    file_path: Option<PathBuf>,
    options: EditorOptions,
}

impl App {
    /// Create an application editing `file_path`, or an unnamed buffer.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            options: EditorOptions::default(),
        }
    }

    /// Override the session tunables.
    #[must_use]
    pub const fn with_options(mut self, options: EditorOptions) -> Self {
        self.options = options;
        self
    }
}
