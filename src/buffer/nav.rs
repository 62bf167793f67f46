//! Line navigation over the gap buffer.
//!
//! These primitives are shared by cursor movement and the renderer; in
//! particular [`advance_to_column`] and the render walk must agree exactly on
//! how a tab advances the display column.

use super::gap::GapBuffer;

/// Display columns per tab stop.
pub const TAB_STOP: usize = 8;

/// Start of the line containing `offset`.
///
/// Scans backward from `offset - 1` to the nearest newline; returns the
/// offset just after it, or 0 when the scan reaches the start of the
/// document.
pub fn line_start(buf: &GapBuffer, offset: usize) -> usize {
    let mut off = offset.min(buf.len());
    while off > 0 {
        if buf.byte_at(off - 1) == b'\n' {
            return off;
        }
        off -= 1;
    }
    0
}

/// Start of the line after the one containing `offset`.
///
/// Scans forward to just past the next newline, or to the document end when
/// the last line has no terminator.
pub fn next_line_start(buf: &GapBuffer, offset: usize) -> usize {
    let len = buf.len();
    let mut off = offset.min(len);
    while off < len {
        off += 1;
        if buf.byte_at(off - 1) == b'\n' {
            return off;
        }
    }
    len
}

/// Advance from `offset` until the display column reaches `target`, a
/// newline, or the end of the document, and return the resulting offset.
///
/// An ordinary byte is one column wide; a tab jumps to the next multiple of
/// [`TAB_STOP`].
pub fn advance_to_column(buf: &GapBuffer, offset: usize, target: usize) -> usize {
    let len = buf.len();
    let mut off = offset.min(len);
    let mut col = 0;
    while off < len && col < target {
        let b = buf.byte_at(off);
        if b == b'\n' {
            break;
        }
        col += if b == b'\t' {
            TAB_STOP - (col % TAB_STOP)
        } else {
            1
        };
        off += 1;
    }
    off
}
