//! Key decoding.
//!
//! Turns the raw byte stream of a terminal in raw mode into logical
//! [`Key`] tokens. Navigation keys arrive as short escape sequences
//! (`ESC [ A`, `ESC [ 5 ~`, `ESC O H`, ...); everything else is a single
//! byte.

use std::fmt;
use std::io;

const ESC: u8 = 0x1b;

/// Map a letter to its control-key byte (`ctrl(b'q')` is Ctrl-Q).
pub const fn ctrl(byte: u8) -> u8 {
    byte & 0x1f
}

/// Byte sent by the Backspace key in raw mode.
pub const BACKSPACE: u8 = 127;
/// Byte sent by the Enter key in raw mode.
pub const ENTER: u8 = b'\r';

/// A logical key produced by [`KeyDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A single printable or control byte.
    Byte(u8),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    /// A bare ESC, or any escape sequence that was not recognised.
    Escape,
}

impl Key {
    /// Whether this key is the control combination for `letter`.
    pub const fn is_ctrl(self, letter: u8) -> bool {
        matches!(self, Self::Byte(b) if b == ctrl(letter))
    }

    /// The byte if this key is printable ASCII.
    pub const fn printable(self) -> Option<u8> {
        match self {
            Self::Byte(b) if b >= 0x20 && b < 0x7f => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(b) if b.is_ascii_graphic() || *b == b' ' => {
                write!(f, "{b} ('{}')", char::from(*b))
            }
            Self::Byte(b) => write!(f, "{b}"),
            Self::ArrowLeft => f.write_str("ArrowLeft"),
            Self::ArrowRight => f.write_str("ArrowRight"),
            Self::ArrowUp => f.write_str("ArrowUp"),
            Self::ArrowDown => f.write_str("ArrowDown"),
            Self::Delete => f.write_str("Delete"),
            Self::Home => f.write_str("Home"),
            Self::End => f.write_str("End"),
            Self::PageUp => f.write_str("PageUp"),
            Self::PageDown => f.write_str("PageDown"),
            Self::Escape => f.write_str("Escape"),
        }
    }
}

/// A source of raw input bytes with a bounded wait per poll.
pub trait ByteSource {
    /// Wait up to the source's poll interval for one byte.
    ///
    /// Returns `Ok(None)` when nothing arrived in time.
    ///
    /// # Errors
    ///
    /// Returns an error when the input can no longer be read.
    fn poll_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Decodes a [`ByteSource`] into [`Key`]s, one key per call.
#[derive(Debug)]
pub struct KeyDecoder<S> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Block until a full key is available.
    ///
    /// Follow-up bytes of an escape sequence get one poll each; a sequence
    /// that stalls or is not recognised decodes as [`Key::Escape`].
    ///
    /// # Errors
    ///
    /// Propagates read failures from the underlying source.
    pub fn next_key(&mut self) -> io::Result<Key> {
        let first = loop {
            if let Some(byte) = self.source.poll_byte()? {
                break byte;
            }
        };
        if first != ESC {
            return Ok(Key::Byte(first));
        }

        let Some(second) = self.source.poll_byte()? else {
            return Ok(Key::Escape);
        };
        let Some(third) = self.source.poll_byte()? else {
            return Ok(Key::Escape);
        };

        let key = match (second, third) {
            (b'[', digit @ b'0'..=b'9') => match self.source.poll_byte()? {
                Some(b'~') => tilde_key(digit),
                _ => None,
            },
            (b'[', b'A') => Some(Key::ArrowUp),
            (b'[', b'B') => Some(Key::ArrowDown),
            (b'[', b'C') => Some(Key::ArrowRight),
            (b'[', b'D') => Some(Key::ArrowLeft),
            (b'[' | b'O', b'H') => Some(Key::Home),
            (b'[' | b'O', b'F') => Some(Key::End),
            _ => None,
        };
        Ok(key.unwrap_or_else(|| {
            tracing::debug!(second, third, "unrecognised escape sequence");
            Key::Escape
        }))
    }
}

const fn tilde_key(digit: u8) -> Option<Key> {
    match digit {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageUp),
        b'6' => Some(Key::PageDown),
        _ => None,
    }
}
