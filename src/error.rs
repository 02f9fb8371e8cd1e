//! Fatal editor errors.
//!
//! Anything here ends the session. Recoverable problems (a failed save,
//! a cancelled prompt) are shown in the message bar instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("failed to switch terminal mode")]
    TerminalMode(#[source] io::Error),

    #[error("failed to query terminal size")]
    WindowSize(#[source] io::Error),

    #[error("failed to read input")]
    Input(#[source] io::Error),

    #[error("failed to write to terminal")]
    Output(#[source] io::Error),

    #[error("short write to terminal: wrote {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = EditorError> = std::result::Result<T, E>;
