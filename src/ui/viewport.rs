//! Viewport paging and the render walk.
//!
//! The [`Viewport`] carries two logical offsets across render passes: `page`,
//! the first displayed character, and `epage`, one past the last offset
//! visited by the previous walk. Everything else — the grid contents and the
//! cursor's screen position — is recomputed from scratch on every pass.

use crate::buffer::{GapBuffer, nav};
use crate::ui::screen::ScreenGrid;

/// The cursor's position within the grid, as computed by the last render
/// pass. The column doubles as the sticky target for vertical movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPos {
    pub row: usize,
    pub col: usize,
}

/// The scrolling window mapped onto the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    page: usize,
    epage: usize,
}

impl Viewport {
    /// A viewport at the top of the document.
    pub const fn new() -> Self {
        Self { page: 0, epage: 0 }
    }

    /// Logical offset of the first displayed character.
    pub const fn page(&self) -> usize {
        self.page
    }

    /// One past the last offset visited during the previous render pass.
    pub const fn epage(&self) -> usize {
        self.epage
    }

    /// Run one full render pass: decide the visible window, fill the grid,
    /// and return the cursor's screen position.
    ///
    /// Paging rules:
    /// - cursor above the window: `page` snaps to the start of the cursor's
    ///   line;
    /// - cursor at or past `epage`: `page` is recomputed by walking to the
    ///   next line start and backing up a grid height of lines — two fewer
    ///   when that walk landed exactly on the document end, which keeps a
    ///   couple of trailing blank rows visible.
    pub fn refresh(&mut self, buf: &GapBuffer, cursor: usize, grid: &mut ScreenGrid) -> CursorPos {
        let rows = grid.rows();
        let cols = grid.cols();
        let len = buf.len();
        grid.clear();

        if cursor < self.page {
            self.page = nav::line_start(buf, cursor);
        }
        if self.epage <= cursor {
            self.page = nav::next_line_start(buf, cursor);
            let back = if self.page == len {
                rows.saturating_sub(2)
            } else {
                rows
            };
            for _ in 0..back {
                self.page = nav::line_start(buf, self.page.saturating_sub(1));
            }
        }

        let mut pos = CursorPos::default();
        let mut row = 0;
        let mut col = 0;
        self.epage = self.page;
        loop {
            if cursor == self.epage {
                pos = CursorPos { row, col };
            }
            if row >= rows || self.epage >= len {
                break;
            }
            let b = buf.byte_at(self.epage);
            if b != b'\r' {
                if b == b'\n' {
                    grid.put(row, col, b' ');
                    col += 1;
                } else if b == b'\t' {
                    let stop = (col / nav::TAB_STOP + 1) * nav::TAB_STOP;
                    while col < stop && col < cols {
                        grid.put(row, col, b' ');
                        col += 1;
                    }
                } else {
                    grid.put(row, col, b);
                    col += 1;
                }
            }
            if b == b'\n' || col >= cols {
                row += 1;
                col = 0;
            }
            self.epage += 1;
        }
        pos
    }
}
