use std::io;
use std::time::Instant;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use crate::app::Model;

use super::status::{WELCOME, message_bar, status_bar};

/// Build one complete frame.
///
/// The frame hides the cursor, repaints every text row, the status bar
/// and the message bar, then places and shows the cursor. Everything is
/// staged into one buffer so the terminal gets a single write.
///
/// Call [`Model::scroll`] first so the offsets include the cursor.
///
/// # Errors
///
/// Only fails if encoding a control sequence fails.
pub fn compose(model: &Model, now: Instant) -> io::Result<Vec<u8>> {
    let vp = &model.viewport;
    let mut out = Vec::with_capacity((vp.width() + 8) * (vp.height() + 2));

    queue!(out, cursor::Hide, cursor::MoveTo(0, 0))?;
    draw_rows(model, &mut out)?;
    draw_status_bar(model, &mut out)?;
    draw_message_bar(model, now, &mut out)?;

    let y = model.cursor.row.saturating_sub(vp.row_offset());
    let x = model.render_col.saturating_sub(vp.col_offset());
    queue!(out, cursor::MoveTo(to_cell(x), to_cell(y)), cursor::Show)?;
    Ok(out)
}

fn draw_rows(model: &Model, out: &mut Vec<u8>) -> io::Result<()> {
    let vp = &model.viewport;
    for y in 0..vp.height() {
        let file_row = vp.row_offset() + y;
        if let Some(row) = model.buffer.row(file_row) {
            let render = row.render();
            let start = vp.col_offset().min(render.len());
            let end = (start + vp.width()).min(render.len());
            out.extend_from_slice(&render[start..end]);
        } else if model.buffer.row_count() == 0 && y == vp.height() / 3 {
            draw_welcome(out, vp.width());
        } else {
            out.push(b'~');
        }
        queue!(out, Clear(ClearType::UntilNewLine))?;
        out.extend_from_slice(b"\r\n");
    }
    Ok(())
}

fn draw_welcome(out: &mut Vec<u8>, width: usize) {
    let text = &WELCOME.as_bytes()[..WELCOME.len().min(width)];
    let mut padding = (width - text.len()) / 2;
    if padding > 0 {
        out.push(b'~');
        padding -= 1;
    }
    out.resize(out.len() + padding, b' ');
    out.extend_from_slice(text);
}

fn draw_status_bar(model: &Model, out: &mut Vec<u8>) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reverse))?;
    out.extend_from_slice(&status_bar(model, model.viewport.width()));
    queue!(out, SetAttribute(Attribute::Reset))?;
    out.extend_from_slice(b"\r\n");
    Ok(())
}

fn draw_message_bar(model: &Model, now: Instant, out: &mut Vec<u8>) -> io::Result<()> {
    queue!(out, Clear(ClearType::UntilNewLine))?;
    out.extend_from_slice(&message_bar(model, now, model.viewport.width()));
    Ok(())
}

fn to_cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
