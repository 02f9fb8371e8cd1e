use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};

use crate::app::{App, Model, update};
use crate::editor::{TextBuffer, file};
use crate::error::EditorError;
use crate::input::{ByteSource, Key, KeyDecoder};
use crate::terminal::{self, RawModeGuard, StdinSource};
use crate::ui::{self, HELP, viewport::Viewport};

impl App {
    /// Run the editor until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, the terminal cannot
    /// be set up, or input/output to the terminal fails. The terminal is
    /// restored before the error is returned.
    pub fn run(&self) -> Result<()> {
        let buffer = self.load_buffer()?;

        let _raw = RawModeGuard::enable(true)?;
        let (cols, rows) = terminal::window_size()?;
        tracing::debug!(cols, rows, "terminal size");

        let mut model = Model::new(buffer, Viewport::for_terminal(cols, rows), self.options);
        model.set_status(HELP, Instant::now());

        let mut decoder = KeyDecoder::new(StdinSource::spawn(self.options.poll_interval)?);
        let mut out = io::stdout().lock();
        let result = Self::event_loop(&mut decoder, &mut out, &mut model);
        if let Err(err) = &result {
            tracing::error!(%err, "session aborted");
        }
        result.context("Editor session failed")
    }

    /// Print every decoded key until `q` is pressed.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be entered or the terminal
    /// cannot be read or written.
    pub fn run_key_echo(&self) -> Result<()> {
        let _raw = RawModeGuard::enable(false)?;
        let mut decoder = KeyDecoder::new(StdinSource::spawn(self.options.poll_interval)?);
        let mut out = io::stdout().lock();
        loop {
            let key = decoder.next_key().map_err(EditorError::Input)?;
            write!(out, "{key}\r\n").map_err(EditorError::Output)?;
            out.flush().map_err(EditorError::Output)?;
            if key == Key::Byte(b'q') {
                return Ok(());
            }
        }
    }

    /// Open the startup file, or an empty buffer when there is none.
    pub(super) fn load_buffer(&self) -> Result<TextBuffer, EditorError> {
        let Some(path) = &self.file_path else {
            return Ok(TextBuffer::empty());
        };
        file::open(path).map_err(|source| EditorError::Open {
            path: path.clone(),
            source,
        })
    }

    /// Draw, read one key, apply it; repeat until the model asks to quit.
    pub(super) fn event_loop<S, W>(
        decoder: &mut KeyDecoder<S>,
        out: &mut W,
        model: &mut Model,
    ) -> Result<(), EditorError>
    where
        S: ByteSource,
        W: Write,
    {
        loop {
            model.scroll();
            let frame = ui::compose(model, Instant::now()).map_err(EditorError::Output)?;
            terminal::write_frame(out, &frame)?;

            let key = decoder.next_key().map_err(EditorError::Input)?;
            tracing::trace!(?key, "key");
            let msg = Self::handle_key(key, model);
            let now = Instant::now();
            *model = update(std::mem::take(model), msg, now);
            Self::handle_side_effects(model, now);

            if model.should_quit {
                tracing::debug!("quit");
                return Ok(());
            }
        }
    }
}
