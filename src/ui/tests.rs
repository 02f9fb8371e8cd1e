use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::viewport::Viewport;
use super::*;
use crate::app::{Message, Model, update};
use crate::config::EditorOptions;
use crate::editor::{Position, TextBuffer};

fn create_model(lines: &[&str], width: usize, height: usize) -> Model {
    let buffer = TextBuffer::from_lines(lines.iter().copied());
    Model::new(buffer, Viewport::new(width, height), EditorOptions::default())
}

fn frame(model: &mut Model, now: Instant) -> String {
    model.scroll();
    String::from_utf8(compose(model, now).unwrap()).unwrap()
}

fn text_rows(frame: &str) -> Vec<&str> {
    frame.split("\r\n").collect()
}

#[test]
fn test_frame_hides_then_shows_cursor() {
    let mut model = create_model(&["hello"], 80, 5);
    let out = frame(&mut model, Instant::now());
    assert!(out.starts_with("\x1b[?25l\x1b[1;1H"));
    assert!(out.ends_with("\x1b[?25h"));
}

#[test]
fn test_frame_is_idempotent() {
    let mut model = create_model(&["one", "\ttwo", "three"], 40, 10);
    model.set_status("hi", Instant::now());
    let now = Instant::now();
    let first = frame(&mut model, now);
    let second = frame(&mut model, now);
    assert_eq!(first, second);
}

#[test]
fn test_rows_past_end_show_tilde() {
    let mut model = create_model(&["only"], 80, 4);
    let out = frame(&mut model, Instant::now());
    let rows = text_rows(&out);
    assert!(rows[0].contains("only"));
    assert!(rows[1].starts_with('~'));
    assert!(rows[3].starts_with('~'));
    assert_eq!(out.matches("\x1b[K").count(), 5, "four text rows plus message bar");
}

#[test]
fn test_empty_buffer_shows_centered_welcome() {
    let mut model = create_model(&[], 80, 9);
    let out = frame(&mut model, Instant::now());
    let rows = text_rows(&out);
    let welcome_row = rows[3];
    assert!(welcome_row.contains(WELCOME));
    let pad = (80 - WELCOME.len()) / 2;
    let expected = format!("~{}{}", " ".repeat(pad - 1), WELCOME);
    assert!(welcome_row.starts_with(&expected));
    assert_eq!(out.matches(WELCOME).count(), 1);
}

#[test]
fn test_welcome_hidden_once_buffer_has_text() {
    let mut model = create_model(&["x"], 80, 9);
    let out = frame(&mut model, Instant::now());
    assert!(!out.contains(WELCOME));
}

#[test]
fn test_welcome_truncated_to_narrow_screen() {
    let mut model = create_model(&[], 10, 3);
    let out = frame(&mut model, Instant::now());
    assert!(out.contains(&WELCOME[..10]));
    assert!(!out.contains(WELCOME));
}

#[test]
fn test_tab_row_renders_as_spaces() {
    let mut model = create_model(&["\t"], 80, 3);
    let out = frame(&mut model, Instant::now());
    assert!(text_rows(&out)[0].contains(&format!("{}\x1b[K", " ".repeat(8))));
}

#[test]
fn test_rows_are_clipped_to_width_and_offset() {
    let mut model = create_model(&["0123456789abcdef"], 4, 3);
    model.cursor = Position::new(0, 10);
    let out = frame(&mut model, Instant::now());
    assert_eq!(model.viewport.col_offset(), 7);
    assert!(text_rows(&out)[0].contains("789a\x1b[K"));
}

#[test]
fn test_cursor_placed_relative_to_offsets() {
    let lines: Vec<String> = (0..200).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut model = create_model(&refs, 80, 24);
    model.cursor = Position::new(100, 3);
    let out = frame(&mut model, Instant::now());
    assert_eq!(model.viewport.row_offset(), 77);
    assert!(out.ends_with("\x1b[24;4H\x1b[?25h"));
    assert!(out.contains("line 77"));
    assert!(!out.contains("line 76\x1b"));
}

#[test]
fn test_cursor_after_tab_uses_render_column() {
    let mut model = create_model(&["\tx"], 80, 3);
    model.cursor = Position::new(0, 1);
    let out = frame(&mut model, Instant::now());
    assert!(out.ends_with("\x1b[1;9H\x1b[?25h"));
}

#[test]
fn test_status_bar_fills_width_exactly() {
    let mut model = create_model(&["a", "b"], 40, 3);
    model.buffer.set_file_path(PathBuf::from("notes.txt"));
    let bar = status_bar(&model, 40);
    assert_eq!(bar.len(), 40);
    let bar = String::from_utf8(bar).unwrap();
    assert!(bar.starts_with("notes.txt - 2 lines"));
    assert!(bar.ends_with("1/2"));
}

#[test]
fn test_status_bar_marks_unnamed_and_modified() {
    let model = create_model(&[], 60, 3);
    let model = update(model, Message::InsertChar(b'x'), Instant::now());
    let bar = String::from_utf8(status_bar(&model, 60)).unwrap();
    assert!(bar.starts_with("[No Name] - 1 lines (modified)"));
}

#[test]
fn test_status_bar_truncates_long_names_and_narrow_screens() {
    let mut model = create_model(&["a"], 80, 3);
    model
        .buffer
        .set_file_path(PathBuf::from("a_really_long_file_name_for_testing.txt"));
    let bar = String::from_utf8(status_bar(&model, 80)).unwrap();
    assert!(bar.starts_with("a_really_long_file_n - 1 lines"));
    assert_eq!(status_bar(&model, 10).len(), 10);
}

#[test]
fn test_status_bar_is_reverse_video() {
    let mut model = create_model(&["a"], 20, 2);
    let out = frame(&mut model, Instant::now());
    assert!(out.contains("\x1b[7m"));
    assert!(out.contains("\x1b[0m\r\n"));
}

#[test]
fn test_message_shown_then_expires() {
    let mut model = create_model(&["a"], 80, 3);
    let start = Instant::now();
    model.set_status("saved it", start);
    assert!(frame(&mut model, start + Duration::from_secs(4)).contains("saved it"));
    assert!(!frame(&mut model, start + Duration::from_secs(5)).contains("saved it"));
}

#[test]
fn test_message_bar_shows_open_prompt() {
    let model = create_model(&["a"], 80, 3);
    let model = update(model, Message::Find, Instant::now());
    let bar = String::from_utf8(message_bar(&model, Instant::now(), 80)).unwrap();
    assert_eq!(bar, "Search:  (Use ESC/Arrows/Enter)");
}

#[test]
fn test_message_bar_clipped_to_width() {
    let mut model = create_model(&["a"], 5, 3);
    model.set_status("a long status", Instant::now());
    assert_eq!(message_bar(&model, Instant::now(), 5), b"a lon");
}
