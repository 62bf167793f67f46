//! The editing session: a gap buffer plus a single cursor.
//!
//! The cursor is one logical offset, clamped to `0..=len`. Vertical movement
//! is column-sticky: callers pass in the visual column computed by the most
//! recent render pass, so moving through lines of unequal length preserves a
//! target column rather than a raw offset.

use std::path::Path;

use anyhow::{Context, Result};

use crate::buffer::{GapBuffer, nav};

/// A text buffer with an insertion point.
#[derive(Debug, Clone)]
pub struct Editor {
    buffer: GapBuffer,
    cursor: usize,
}

impl Editor {
    /// Create an empty session with the given storage capacity.
    pub fn empty(capacity: usize) -> Self {
        Self {
            buffer: GapBuffer::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Create a session pre-loaded with file content (carriage returns
    /// stripped, truncated to capacity). The cursor starts at offset 0.
    pub fn from_bytes(bytes: &[u8], capacity: usize) -> Self {
        Self {
            buffer: GapBuffer::from_bytes(bytes, capacity),
            cursor: 0,
        }
    }

    /// The current cursor offset.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Read access to the underlying buffer.
    pub const fn buffer(&self) -> &GapBuffer {
        &self.buffer
    }

    /// Logical document length.
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the document holds no bytes.
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether the document has unsaved edits.
    pub const fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// 1-based line number of the cursor: newlines in the logical document
    /// before it, plus one.
    pub fn line_number(&self) -> usize {
        let (head, tail) = self.buffer.slices();
        let newlines = if self.cursor <= head.len() {
            count_newlines(&head[..self.cursor])
        } else {
            count_newlines(head) + count_newlines(&tail[..self.cursor - head.len()])
        };
        newlines + 1
    }

    // --- Edits ---

    /// Insert a byte at the cursor; saturates silently when the buffer is
    /// full.
    pub fn insert(&mut self, byte: u8) {
        self.cursor = self.buffer.insert(self.cursor, byte);
    }

    /// Delete the byte before the cursor; no-op at document start.
    pub fn delete_back(&mut self) {
        self.cursor = self.buffer.delete_back(self.cursor);
    }

    // --- Cursor movement ---

    /// Move one offset left; no-op at document start.
    pub const fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move one offset right; no-op at document end.
    pub const fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
    }

    /// Move to the previous line, landing as close to display column `col`
    /// as the line allows.
    pub fn move_up(&mut self, col: usize) {
        let start = nav::line_start(&self.buffer, self.cursor);
        let above = nav::line_start(&self.buffer, start.saturating_sub(1));
        self.cursor = nav::advance_to_column(&self.buffer, above, col);
    }

    /// Move to the next line, landing as close to display column `col` as
    /// the line allows.
    pub fn move_down(&mut self, col: usize) {
        let next = nav::next_line_start(&self.buffer, self.cursor);
        self.cursor = nav::advance_to_column(&self.buffer, next, col);
    }

    // --- Persistence ---

    /// Write the document to `path` and clear the dirty flag.
    ///
    /// The gap is parked at offset 0 first so the logical bytes are the
    /// contiguous tail of the region; the cursor offset is restored
    /// afterwards. On Windows each newline is re-expanded to CRLF.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        let cursor = self.cursor;
        self.buffer.move_gap_to(0);
        let (_, content) = self.buffer.slices();
        write_document(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        self.cursor = cursor;
        self.buffer.mark_clean();
        Ok(())
    }
}

fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}

#[cfg(not(windows))]
fn write_document(path: &Path, content: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, content)
}

#[cfg(windows)]
fn write_document(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut out = Vec::with_capacity(content.len());
    for &b in content {
        if b == b'\n' {
            out.push(b'\r');
        }
        out.push(b);
    }
    std::fs::write(path, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(text: &str) -> Editor {
        Editor::from_bytes(text.as_bytes(), 256)
    }

    // --- Horizontal movement ---

    #[test]
    fn test_move_left_at_start_is_noop() {
        let mut ed = editor("hi");
        ed.move_left();
        assert_eq!(ed.cursor(), 0);
    }

    #[test]
    fn test_move_right_at_end_is_noop() {
        let mut ed = editor("hi");
        ed.move_right();
        ed.move_right();
        ed.move_right();
        assert_eq!(ed.cursor(), 2);
    }

    #[test]
    fn test_move_right_then_left() {
        let mut ed = editor("hi");
        ed.move_right();
        assert_eq!(ed.cursor(), 1);
        ed.move_left();
        assert_eq!(ed.cursor(), 0);
    }

    // --- Vertical movement ---

    #[test]
    fn test_move_down_lands_at_column() {
        let mut ed = editor("hello\nworld\n");
        ed.move_right();
        ed.move_right();
        ed.move_right();
        ed.move_down(3);
        assert_eq!(ed.cursor(), 9); // 'l' of "world"
    }

    #[test]
    fn test_move_up_lands_at_column() {
        let mut ed = editor("hello\nworld\n");
        ed.move_down(3);
        ed.move_up(3);
        assert_eq!(ed.cursor(), 3);
    }

    #[test]
    fn test_move_down_clamps_to_short_line() {
        let mut ed = editor("hello\nhi\nworld");
        ed.move_down(4);
        assert_eq!(ed.cursor(), 8); // end of "hi"
    }

    #[test]
    fn test_sticky_column_across_short_line() {
        // Column memory belongs to the caller: passing the same column down
        // through a short line restores the position on the longer one.
        let mut ed = editor("hello\nhi\nworld");
        ed.move_down(4);
        ed.move_down(4);
        assert_eq!(ed.cursor(), 13); // 'd' column of "world"
    }

    #[test]
    fn test_move_up_on_first_line_goes_to_line_start() {
        let mut ed = editor("hello");
        ed.move_right();
        ed.move_right();
        ed.move_up(0);
        assert_eq!(ed.cursor(), 0);
    }

    #[test]
    fn test_move_down_on_last_line_goes_to_end() {
        let mut ed = editor("hi");
        ed.move_down(5);
        assert_eq!(ed.cursor(), 2);
    }

    // --- Edits ---

    #[test]
    fn test_typing() {
        let mut ed = Editor::empty(16);
        for &b in b"Hi\n" {
            ed.insert(b);
        }
        assert_eq!(ed.len(), 3);
        assert_eq!(ed.cursor(), 3);
        assert!(ed.is_dirty());
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut ed = editor("x");
        ed.delete_back();
        assert_eq!(ed.len(), 1);
        assert_eq!(ed.cursor(), 0);
    }

    #[test]
    fn test_insert_at_saturation_keeps_cursor() {
        let mut ed = Editor::from_bytes(b"ab", 2);
        ed.move_right();
        ed.insert(b'x');
        assert_eq!(ed.len(), 2);
        assert_eq!(ed.cursor(), 1);
        assert_eq!(ed.buffer().to_bytes(), b"ab");
    }

    // --- Line numbering ---

    #[test]
    fn test_line_number_counts_newlines_before_cursor() {
        let mut ed = editor("one\ntwo\nthree");
        assert_eq!(ed.line_number(), 1);
        ed.move_down(0);
        assert_eq!(ed.line_number(), 2);
        ed.move_down(2);
        assert_eq!(ed.line_number(), 3);
    }

    #[test]
    fn test_line_number_with_gap_before_cursor() {
        // Edit near the start so the gap sits before the cursor, then make
        // sure the count still walks logical bytes only.
        let mut ed = editor("a\nb\nc\n");
        ed.insert(b'x'); // gap now at offset 1
        ed.move_down(0);
        ed.move_down(0);
        assert_eq!(ed.line_number(), 3);
    }

    // --- Persistence ---

    #[test]
    fn test_save_restores_cursor_and_clears_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut ed = editor("hello\nworld\n");
        ed.move_down(3);
        let cursor = ed.cursor();
        ed.insert(b'!');
        ed.delete_back();
        ed.save_to(&path).unwrap();
        assert_eq!(ed.cursor(), cursor);
        assert!(!ed.is_dirty());
        assert_eq!(std::fs::read(&path).unwrap(), b"hello\nworld\n");
    }

    #[test]
    fn test_save_to_unwritable_path_keeps_dirty() {
        let mut ed = editor("hi");
        ed.insert(b'!');
        let err = ed.save_to(Path::new("/definitely/not/a/dir/out.txt"));
        assert!(err.is_err());
        assert!(ed.is_dirty());
    }
}
