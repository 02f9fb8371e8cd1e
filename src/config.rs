use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Quit presses needed to discard unsaved changes.
pub const QUIT_TIMES: u8 = 3;
/// How long a status message stays in the message bar.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);
/// Longest single wait for an input byte.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Environment variable naming a log file when `--log-file` is not given.
pub const LOG_ENV: &str = "KILN_LOG";

/// Session tunables, passed explicitly into the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    pub quit_times: u8,
    pub message_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            quit_times: QUIT_TIMES,
            message_timeout: MESSAGE_TIMEOUT,
            poll_interval: POLL_INTERVAL,
        }
    }
}

impl EditorOptions {
    /// Apply command-line overrides on top of the defaults.
    ///
    /// The CLI already limits `quit_times` to 1..=9; library callers are
    /// not checked by clap, so a zero is raised to one here.
    pub fn from_flags(quit_times: Option<u8>, message_timeout_secs: Option<u64>) -> Self {
        let defaults = Self::default();
        Self {
            quit_times: quit_times.unwrap_or(defaults.quit_times).max(1),
            message_timeout: message_timeout_secs
                .map_or(defaults.message_timeout, Duration::from_secs),
            ..defaults
        }
    }
}

/// Pick the log file: the CLI flag wins over the environment.
pub fn resolve_log_path(cli: Option<PathBuf>, env: Option<OsString>) -> Option<PathBuf> {
    cli.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
}
