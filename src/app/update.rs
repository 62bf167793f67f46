use std::path::PathBuf;

use crate::app::Model;

/// Columns the prompt prefix occupies; the entered name fills the rest.
const PROMPT_RESERVED: usize = crate::ui::status::PREFIX.len();

/// All edit commands the session understands.
///
/// Key decoding is external; by the time a `Message` exists it is already a
/// document-level command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Cursor
    /// Move the cursor one offset left
    MoveLeft,
    /// Move the cursor one offset right
    MoveRight,
    /// Move the cursor to the previous line, column-sticky
    MoveUp,
    /// Move the cursor to the next line, column-sticky
    MoveDown,

    // Edits
    /// Insert a byte at the cursor
    Insert(u8),
    /// Delete the byte before the cursor (Backspace)
    DeleteBack,

    // Session
    /// Save the document (may open the filename prompt)
    Save,
    /// Repaint the screen
    Redraw,
    /// Show the program version in the bar
    ShowVersion,
    /// Acknowledge and clear a pending notice
    DismissNotice,
    /// Quit the application
    Quit,

    // Filename prompt sub-mode
    /// Append a character to the filename being entered
    PromptChar(char),
    /// Remove the last character of the filename being entered
    PromptBackspace,
    /// Accept the entered filename and save
    PromptSubmit,
    /// Abandon the filename prompt
    PromptCancel,
}

/// Apply one message to the model and run a full render pass.
///
/// All state transitions happen here; the only side effect is the file write
/// performed by `Save`/`PromptSubmit`.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::MoveLeft => model.editor.move_left(),
        Message::MoveRight => model.editor.move_right(),
        Message::MoveUp => model.editor.move_up(model.cursor_pos.col),
        Message::MoveDown => model.editor.move_down(model.cursor_pos.col),

        Message::Insert(byte) => model.editor.insert(byte),
        Message::DeleteBack => model.editor.delete_back(),

        Message::Save => {
            if model.file_path.is_some() {
                save(&mut model);
            } else {
                model.prompt = Some(String::new());
            }
        }
        Message::Redraw => {}
        Message::ShowVersion => {
            model.notice = Some(format!("scrib {}", env!("CARGO_PKG_VERSION")));
        }
        Message::DismissNotice => model.notice = None,
        Message::Quit => model.should_quit = true,

        Message::PromptChar(c) => {
            if let Some(entered) = model.prompt.as_mut()
                && entered.len() < model.geometry.cols().saturating_sub(PROMPT_RESERVED)
                && (c.is_ascii_alphanumeric() || c == '.' || c == '_')
            {
                entered.push(c);
            }
        }
        Message::PromptBackspace => {
            if let Some(entered) = model.prompt.as_mut() {
                entered.pop();
            }
        }
        Message::PromptSubmit => {
            let entered = model.prompt.take().unwrap_or_default();
            if entered.is_empty() {
                model.notice = Some("no filename".to_string());
            } else {
                model.file_path = Some(PathBuf::from(entered));
                save(&mut model);
            }
        }
        Message::PromptCancel => model.prompt = None,
    }

    model.refresh();
    model
}

fn save(model: &mut Model) {
    let Some(path) = model.file_path.clone() else {
        return;
    };
    match model.editor.save_to(&path) {
        Ok(()) => model.notice = Some("save ok".to_string()),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "save failed");
            model.notice = Some(format!("save failed: {err}"));
        }
    }
}
