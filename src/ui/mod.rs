//! Terminal UI components.
//!
//! This module contains all screen-related code:
//! - [`viewport`]: Scroll offsets and the visible window
//! - frame composition: [`compose`] builds one frame as a byte payload
//! - status text: the status bar and the message bar

pub mod viewport;

mod render;
mod status;

pub use render::compose;
pub use status::{HELP, WELCOME, message_bar, status_bar};

#[cfg(test)]
mod tests;
