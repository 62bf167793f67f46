use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::editor::Editor;
use crate::ui::screen::Geometry;

impl App {
    /// Run the editing session.
    ///
    /// # Errors
    ///
    /// Returns an error when the terminal is too small, cannot be put into
    /// raw mode, or the event loop hits an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let (cols, rows) =
            crossterm::terminal::size().context("failed to query terminal size")?;
        let geometry = Geometry::new(cols, rows)?;

        let editor = self.load_editor();

        let mut terminal = ratatui::try_init()
            .context("failed to initialize terminal — scrib requires an interactive terminal")?;
        let mut model = Model::new(self.file_path.clone(), editor, geometry);

        let result = Self::event_loop(&mut terminal, &mut model);

        ratatui::restore();
        result
    }

    /// Load the startup document. An unreadable file is a recoverable
    /// condition: the session starts empty on the same path.
    fn load_editor(&self) -> Editor {
        let Some(path) = &self.file_path else {
            return Editor::empty(self.capacity);
        };
        match std::fs::read(path) {
            Ok(bytes) => {
                tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded");
                Editor::from_bytes(&bytes, self.capacity)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "open failed, starting empty");
                Editor::empty(self.capacity)
            }
        }
    }

    /// One blocking read, one update, one draw — repeated until quit.
    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        loop {
            terminal.draw(|frame| crate::ui::render(model, frame))?;

            let ev = event::read().context("failed to read terminal event")?;
            if let Some(msg) = Self::handle_event(&ev, model) {
                let redraw = msg == Message::Redraw;
                *model = update(std::mem::take(model), msg);
                if redraw {
                    terminal.clear()?;
                }
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
