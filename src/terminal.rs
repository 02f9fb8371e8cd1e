//! Terminal collaborators: raw mode, size query, input bytes, frame output.

use std::io::{self, Read, Write};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crossterm::cursor;
use crossterm::queue;
use crossterm::terminal::{self, Clear, ClearType};

use crate::error::{EditorError, Result};
use crate::input::ByteSource;

static RAW_ENABLED: AtomicBool = AtomicBool::new(false);
static CLEAR_ON_RESTORE: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK: Once = Once::new();

/// Keeps the terminal in raw mode for as long as it lives.
///
/// Dropping the guard (or panicking while it is alive) restores the
/// original mode exactly once.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Switch to raw mode. With `clear_on_exit` the screen is wiped and
    /// the cursor homed when the mode is restored.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::TerminalMode`] if the mode cannot be set.
    pub fn enable(clear_on_exit: bool) -> Result<Self> {
        terminal::enable_raw_mode().map_err(EditorError::TerminalMode)?;
        CLEAR_ON_RESTORE.store(clear_on_exit, Ordering::SeqCst);
        RAW_ENABLED.store(true, Ordering::SeqCst);
        PANIC_HOOK.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                restore();
                previous(info);
            }));
        });
        tracing::debug!("raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Leave raw mode if it is still on. Safe to call more than once.
pub fn restore() {
    if !RAW_ENABLED.swap(false, Ordering::SeqCst) {
        return;
    }
    let mut out = io::stdout();
    if CLEAR_ON_RESTORE.load(Ordering::SeqCst) {
        let _ = queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0));
    }
    let _ = queue!(out, cursor::Show);
    let _ = out.flush();
    if let Err(err) = terminal::disable_raw_mode() {
        tracing::warn!(%err, "failed to restore terminal mode");
    }
}

/// Terminal size as `(cols, rows)`.
///
/// # Errors
///
/// Returns [`EditorError::WindowSize`] when the size cannot be read.
pub fn window_size() -> Result<(u16, u16)> {
    let (cols, rows) = terminal::size().map_err(EditorError::WindowSize)?;
    if cols == 0 || rows == 0 {
        return Err(EditorError::WindowSize(io::Error::other(
            "terminal reported a zero size",
        )));
    }
    Ok((cols, rows))
}

/// Emit one composed frame.
///
/// The payload is pushed until the sink has taken all of it, so a
/// buffering writer that accepts part of the frame per call is fine.
///
/// # Errors
///
/// A failed write is [`EditorError::Output`]; a sink that stops accepting
/// bytes before the payload is done is [`EditorError::ShortWrite`].
pub fn write_frame(out: &mut impl Write, payload: &[u8]) -> Result<()> {
    let mut written = 0;
    while written < payload.len() {
        match out.write(&payload[written..]) {
            Ok(0) => {
                return Err(EditorError::ShortWrite {
                    written,
                    expected: payload.len(),
                });
            }
            Ok(n) => written += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(EditorError::Output(err)),
        }
    }
    out.flush().map_err(EditorError::Output)
}

/// Stdin bytes with a bounded wait per poll.
///
/// A reader thread blocks on stdin and forwards bytes over a channel;
/// polling waits on the channel for at most `timeout`.
#[derive(Debug)]
pub struct StdinSource {
    rx: Receiver<io::Result<u8>>,
    timeout: Duration,
}

impl StdinSource {
    /// Start reading stdin in the background.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Input`] if the reader thread cannot start.
    pub fn spawn(timeout: Duration) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("kiln-stdin".to_string())
            .spawn(move || {
                let mut stdin = io::stdin().lock();
                let mut buf = [0u8; 64];
                loop {
                    match stdin.read(&mut buf) {
                        Ok(0) => break,
                        Ok(n) => {
                            for &byte in &buf[..n] {
                                if tx.send(Ok(byte)).is_err() {
                                    return;
                                }
                            }
                        }
                        Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                        Err(err) => {
                            let _ = tx.send(Err(err));
                            break;
                        }
                    }
                }
            })
            .map_err(EditorError::Input)?;
        Ok(Self { rx, timeout })
    }
}

impl ByteSource for StdinSource {
    fn poll_byte(&mut self) -> io::Result<Option<u8>> {
        match self.rx.recv_timeout(self.timeout) {
            Ok(byte) => byte.map(Some),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )),
        }
    }
}
