use std::time::Instant;

use crate::app::Model;

/// Shown once, centred, when the buffer is completely empty.
pub const WELCOME: &str = concat!("Kiln editor -- version ", env!("CARGO_PKG_VERSION"));

/// Status message set at startup.
pub const HELP: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// Longest file name shown in the status bar.
const NAME_WIDTH: usize = 20;

/// Status bar text, exactly `width` bytes: file name, line count and
/// dirty marker on the left, `row/rows` on the right when it fits.
pub fn status_bar(model: &Model, width: usize) -> Vec<u8> {
    let name = model.buffer.file_path().map_or_else(
        || "[No Name]".to_string(),
        |path| path.display().to_string(),
    );
    let name: String = name.chars().take(NAME_WIDTH).collect();
    let modified = if model.buffer.is_dirty() {
        " (modified)"
    } else {
        ""
    };
    let rows = model.buffer.row_count();
    let left = format!("{name} - {rows} lines{modified}");
    let right = format!("{}/{rows}", model.cursor.row + 1);

    let mut line = left.into_bytes();
    line.truncate(width);
    while line.len() < width {
        if width - line.len() == right.len() {
            line.extend_from_slice(right.as_bytes());
            break;
        }
        line.push(b' ');
    }
    line
}

/// Message bar text: the open prompt, or a status message that has not
/// expired yet. Clipped to `width`.
pub fn message_bar(model: &Model, now: Instant, width: usize) -> Vec<u8> {
    let mut text = match model.prompt() {
        Some(prompt) => prompt.label().into_bytes(),
        None => model
            .active_status(now)
            .map(|s| s.as_bytes().to_vec())
            .unwrap_or_default(),
    };
    text.truncate(width);
    text
}
