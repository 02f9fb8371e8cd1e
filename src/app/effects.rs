use std::time::Instant;

use crate::app::{App, Model};
use crate::editor::file;

impl App {
    /// Perform the I/O requested by the last update.
    pub(super) fn handle_side_effects(model: &mut Model, now: Instant) {
        if std::mem::take(&mut model.save_requested) {
            Self::save_buffer(model, now);
        }
    }

    /// Write the buffer to its file. Failure is reported in the status
    /// bar and leaves the buffer dirty.
    fn save_buffer(model: &mut Model, now: Instant) {
        let Some(path) = model.buffer.file_path().map(std::path::Path::to_path_buf) else {
            return;
        };
        let contents = model.buffer.serialize();
        match file::save(&path, &contents) {
            Ok(written) => {
                model.buffer.mark_clean();
                model.set_status(format!("{written} bytes written to disk"), now);
                tracing::info!(path = %path.display(), written, "saved file");
            }
            Err(err) => {
                model.set_status(format!("Can't save! I/O error: {err}"), now);
                tracing::warn!(path = %path.display(), %err, "save failed");
            }
        }
    }
}
