use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message, Model};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            // Geometry is fixed for the session; resizes are ignored.
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // A pending notice swallows the next key press as its acknowledgment.
        if model.notice.is_some() {
            return Some(Message::DismissNotice);
        }

        if model.prompting() {
            return match key.code {
                KeyCode::Enter => Some(Message::PromptSubmit),
                KeyCode::Esc => Some(Message::PromptCancel),
                KeyCode::Backspace => Some(Message::PromptBackspace),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Message::PromptChar(c))
                }
                _ => None,
            };
        }

        match key.code {
            // Navigation
            KeyCode::Left => Some(Message::MoveLeft),
            KeyCode::Right => Some(Message::MoveRight),
            KeyCode::Up => Some(Message::MoveUp),
            KeyCode::Down => Some(Message::MoveDown),

            // Session
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Save)
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Redraw)
            }
            KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::ShowVersion)
            }

            // Edits
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Enter => Some(Message::Insert(b'\n')),
            KeyCode::Tab => Some(Message::Insert(b'\t')),
            KeyCode::Char(c)
                if c.is_ascii()
                    && !c.is_ascii_control()
                    && !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(Message::Insert(c as u8))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Editor;
    use crate::ui::Geometry;

    fn model() -> Model {
        Model::new(None, Editor::empty(64), Geometry::new(80, 24).unwrap())
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_arrows_move() {
        let m = model();
        assert_eq!(
            App::handle_key(press(KeyCode::Left, KeyModifiers::NONE), &m),
            Some(Message::MoveLeft)
        );
        assert_eq!(
            App::handle_key(press(KeyCode::Down, KeyModifiers::NONE), &m),
            Some(Message::MoveDown)
        );
    }

    #[test]
    fn test_printable_ascii_inserts() {
        let m = model();
        assert_eq!(
            App::handle_key(press(KeyCode::Char('a'), KeyModifiers::NONE), &m),
            Some(Message::Insert(b'a'))
        );
        assert_eq!(
            App::handle_key(press(KeyCode::Enter, KeyModifiers::NONE), &m),
            Some(Message::Insert(b'\n'))
        );
        assert_eq!(
            App::handle_key(press(KeyCode::Tab, KeyModifiers::NONE), &m),
            Some(Message::Insert(b'\t'))
        );
    }

    #[test]
    fn test_non_ascii_is_ignored() {
        let m = model();
        assert_eq!(
            App::handle_key(press(KeyCode::Char('é'), KeyModifiers::NONE), &m),
            None
        );
    }

    #[test]
    fn test_control_chords() {
        let m = model();
        assert_eq!(
            App::handle_key(press(KeyCode::Char('s'), KeyModifiers::CONTROL), &m),
            Some(Message::Save)
        );
        assert_eq!(
            App::handle_key(press(KeyCode::Char('q'), KeyModifiers::CONTROL), &m),
            Some(Message::Quit)
        );
    }

    #[test]
    fn test_notice_swallows_next_key() {
        let mut m = model();
        m.notice = Some("save ok".to_string());
        assert_eq!(
            App::handle_key(press(KeyCode::Char('a'), KeyModifiers::NONE), &m),
            Some(Message::DismissNotice)
        );
    }

    #[test]
    fn test_prompt_mode_routes_keys() {
        let mut m = model();
        m.prompt = Some("out".to_string());
        assert_eq!(
            App::handle_key(press(KeyCode::Char('x'), KeyModifiers::NONE), &m),
            Some(Message::PromptChar('x'))
        );
        assert_eq!(
            App::handle_key(press(KeyCode::Enter, KeyModifiers::NONE), &m),
            Some(Message::PromptSubmit)
        );
        assert_eq!(
            App::handle_key(press(KeyCode::Esc, KeyModifiers::NONE), &m),
            Some(Message::PromptCancel)
        );
        assert_eq!(
            App::handle_key(press(KeyCode::Backspace, KeyModifiers::NONE), &m),
            Some(Message::PromptBackspace)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let m = model();
        let mut key = press(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(App::handle_key(key, &m), None);
    }
}
