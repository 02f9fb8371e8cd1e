use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use super::TextBuffer;

/// Read `path` as a list of lines with `\n` / `\r\n` terminators removed.
///
/// # Errors
///
/// Returns any error from opening or reading the file.
pub fn load_lines(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    let reader = BufReader::new(File::open(path)?);
    reader
        .split(b'\n')
        .map(|line| {
            line.map(|mut bytes| {
                while matches!(bytes.last(), Some(b'\r' | b'\n')) {
                    bytes.pop();
                }
                bytes
            })
        })
        .collect()
}

/// Open `path` into a clean buffer that remembers where it came from.
///
/// # Errors
///
/// Returns any error from [`load_lines`].
pub fn open(path: &Path) -> io::Result<TextBuffer> {
    let lines = load_lines(path)?;
    tracing::info!(path = %path.display(), rows = lines.len(), "loaded file");
    Ok(TextBuffer::from_lines(lines).with_file_path(path))
}

/// Create or truncate `path` to exactly `contents`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns any error from opening, truncating or writing the file.
pub fn save(path: &Path, contents: &[u8]) -> io::Result<usize> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    file.set_len(contents.len() as u64)?;
    file.write_all(contents)?;
    file.flush()?;
    Ok(contents.len())
}
