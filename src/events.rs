use crate::tea::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps terminal key events to view messages
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key press. Returns `None` for keys the view does not use.
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Message> {
        // Windows reports both press and release
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Activate),
            KeyCode::Char('i') => Some(Message::ToggleInstructions),
            KeyCode::Char('d') => Some(Message::DismissToasts),
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            _ => None,
        }
    }
}
