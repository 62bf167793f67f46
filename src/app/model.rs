use std::path::PathBuf;

use crate::editor::Editor;
use crate::ui::screen::{Geometry, ScreenGrid};
use crate::ui::status;
use crate::ui::viewport::{CursorPos, Viewport};

/// The complete session state.
///
/// All state lives here — no globals. The control loop owns one `Model`
/// exclusively; `update` consumes and returns it.
#[derive(Debug, Clone)]
pub struct Model {
    /// Document and cursor.
    pub editor: Editor,
    /// Scroll window carried across render passes.
    pub viewport: Viewport,
    /// The character grid rewritten by every render pass.
    pub grid: ScreenGrid,
    /// Display geometry, fixed for the session.
    pub geometry: Geometry,
    /// Path the document loads from and saves to; `None` until named.
    pub file_path: Option<PathBuf>,
    /// Cursor screen position from the last render pass. The column is the
    /// sticky target read by vertical movement; only the renderer writes it.
    pub cursor_pos: CursorPos,
    /// Pending message shown in the bar; dismissed by the next key press.
    pub notice: Option<String>,
    /// Filename being entered while saving an unnamed document.
    pub prompt: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl Model {
    /// Create a session and run the initial render pass.
    pub fn new(file_path: Option<PathBuf>, editor: Editor, geometry: Geometry) -> Self {
        let mut model = Self {
            editor,
            viewport: Viewport::new(),
            grid: ScreenGrid::new(geometry),
            geometry,
            file_path,
            cursor_pos: CursorPos::default(),
            notice: None,
            prompt: None,
            should_quit: false,
        };
        model.refresh();
        model
    }

    /// Run one full render pass: repage the viewport, rewrite the grid, and
    /// cache the cursor's screen position.
    pub fn refresh(&mut self) {
        self.cursor_pos =
            self.viewport
                .refresh(self.editor.buffer(), self.editor.cursor(), &mut self.grid);
    }

    /// Whether the filename prompt sub-mode is active.
    pub const fn prompting(&self) -> bool {
        self.prompt.is_some()
    }

    /// The text for the top bar: a pending notice wins, then the filename
    /// prompt, then the regular status line.
    pub fn bar_text(&self) -> String {
        let width = self.geometry.cols();
        if let Some(notice) = self.notice.as_deref() {
            return status::notice_line(notice, width);
        }
        if let Some(entered) = self.prompt.as_deref() {
            return status::prompt_line(entered, width);
        }
        status::status_line(
            self.file_name().as_deref(),
            self.editor.line_number(),
            self.cursor_pos.col,
            self.editor.buffer().free(),
            width,
        )
    }

    fn file_name(&self) -> Option<String> {
        self.file_path
            .as_ref()
            .map(|p| p.file_name().map_or_else(
                || p.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            ))
    }
}

impl Default for Model {
    // A throwaway model for std::mem::take in the event loop.
    fn default() -> Self {
        let geometry =
            Geometry::new(crate::ui::screen::MIN_COLS, crate::ui::screen::MIN_ROWS)
                .unwrap_or_else(|_| unreachable!("minimum geometry is valid"));
        Self::new(None, Editor::empty(0), geometry)
    }
}
