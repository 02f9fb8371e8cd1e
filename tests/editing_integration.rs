use std::time::Instant;

use kiln::app::{Message, Model, update};
use kiln::config::EditorOptions;
use kiln::editor::{Direction, file};
use kiln::ui::compose;
use kiln::ui::viewport::Viewport;

fn apply(model: Model, msgs: &[Message]) -> Model {
    msgs.iter()
        .fold(model, |model, &msg| update(model, msg, Instant::now()))
}

#[test]
fn test_open_edit_save_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "first\r\nsecond\n").unwrap();

    let buffer = file::open(&path).unwrap();
    assert_eq!(buffer.row_count(), 2);
    assert_eq!(buffer.row(0).unwrap().raw(), b"first");

    let model = Model::new(buffer, Viewport::new(80, 22), EditorOptions::default());
    let model = apply(
        model,
        &[
            Message::MoveCursor(Direction::Down),
            Message::MoveEnd,
            Message::InsertChar(b'!'),
            Message::InsertNewline,
            Message::InsertChar(b'\t'),
        ],
    );
    assert!(model.buffer.is_dirty());

    let written = file::save(&path, &model.buffer.serialize()).unwrap();
    assert_eq!(written, "first\nsecond!\n\t\n".len());

    let reloaded = file::open(&path).unwrap();
    assert_eq!(reloaded.row_count(), 3);
    assert_eq!(reloaded.row(1).unwrap().raw(), b"second!");
    assert_eq!(reloaded.row(2).unwrap().render(), b"        ");
    assert!(!reloaded.is_dirty());
}

#[test]
fn test_frame_reflects_edits() {
    let model = Model::new(
        kiln::editor::TextBuffer::empty(),
        Viewport::new(30, 6),
        EditorOptions::default(),
    );
    let mut model = apply(
        model,
        &[Message::InsertChar(b'o'), Message::InsertChar(b'k')],
    );
    model.scroll();
    let now = Instant::now();
    let frame = compose(&model, now).unwrap();
    let text = String::from_utf8(frame.clone()).unwrap();

    assert!(text.contains("ok\x1b[K"));
    assert!(text.contains("[No Name] - 1 lines (modified)"));
    assert!(text.ends_with("\x1b[1;3H\x1b[?25h"));
    assert_eq!(compose(&model, now).unwrap(), frame);
}
