//! Save/load round trips through the filesystem.

use scrib::editor::Editor;

#[test]
fn save_then_load_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");

    let mut ed = Editor::empty(4096);
    for &b in b"first line\n\tindented\nlast line without newline" {
        ed.insert(b);
    }
    ed.save_to(&path).unwrap();

    let reloaded = Editor::from_bytes(&std::fs::read(&path).unwrap(), 4096);
    assert_eq!(
        reloaded.buffer().to_bytes(),
        ed.buffer().to_bytes(),
        "reloaded document must match the saved one"
    );
}

#[test]
fn crlf_input_normalizes_on_load_and_survives_resave() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("dos.txt");
    let dst = dir.path().join("unix.txt");
    std::fs::write(&src, b"one\r\ntwo\r\n").unwrap();

    let mut ed = Editor::from_bytes(&std::fs::read(&src).unwrap(), 4096);
    assert_eq!(ed.buffer().to_bytes(), b"one\ntwo\n");

    ed.insert(b'x'); // mark dirty so the save is meaningful
    ed.delete_back();
    ed.save_to(&dst).unwrap();

    let reloaded = Editor::from_bytes(&std::fs::read(&dst).unwrap(), 4096);
    assert_eq!(reloaded.buffer().to_bytes(), b"one\ntwo\n");
}

#[test]
fn save_after_scattered_edits_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");

    let mut ed = Editor::from_bytes(b"abcdef\nghijkl\n", 4096);
    // Edit at both ends so the gap crosses the document.
    ed.insert(b'>');
    for _ in 0..13 {
        ed.move_right();
    }
    ed.insert(b'<');
    ed.save_to(&path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b">abcdef\nghijkl<\n");
}
