// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorError)
    clippy::module_name_repetitions
)]

//! # Kiln
//!
//! A small terminal text editor.
//!
//! Kiln edits one file at a time in a raw-mode terminal with:
//! - Tab-aware rendering and horizontal/vertical scrolling
//! - Incremental search with wraparound
//! - Save-as prompt and unsaved-changes quit confirmation
//!
//! ## Architecture
//!
//! Kiln uses The Elm Architecture (TEA) pattern:
//! - **Model**: Session state
//! - **Message**: Actions decoded from keystrokes
//! - **Update**: State transitions
//! - **View**: Compose one frame and write it to the terminal
//!
//! ## Modules
//!
//! - [`app`]: Main loop and session state
//! - [`editor`]: Rows, the text buffer and file I/O
//! - [`input`]: Byte-level key decoding
//! - [`search`]: Incremental search
//! - [`ui`]: Viewport and frame composition
//! - [`terminal`]: Raw mode, window size and output
//! - [`config`]: Session tunables
//! - [`error`]: Error types

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod search;
pub mod terminal;
pub mod ui;

/// Re-exports for convenience
pub mod prelude {
    pub use crate::app::{App, Message, Model, update};
    pub use crate::editor::TextBuffer;
    pub use crate::ui::viewport::Viewport;
}
