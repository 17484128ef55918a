use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::modules::module_handler::ModuleHandler;
use crate::util::io::event::AppEvent;

use super::AssistantHandler;

impl ModuleHandler for AssistantHandler {
    fn handle_key(&mut self, key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::ToggleAssistant(self.kind)),
            KeyCode::Char('r') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_recording();
                None
            }
            KeyCode::Enter => {
                if self.is_recording {
                    // Send while listening behaves like stopping the recording first
                    self.toggle_recording();
                }
                Some(AppEvent::AssistantSubmit(self.kind))
            }
            KeyCode::Backspace if !self.is_recording => {
                self.chat_input.backspace();
                None
            }
            KeyCode::Char(ch) if !self.is_recording => {
                self.chat_input.push(ch);
                None
            }
            KeyCode::Up | KeyCode::PageUp => {
                self.chat_input.scroll_up();
                None
            }
            KeyCode::Down | KeyCode::PageDown => {
                self.chat_input.scroll_down(usize::MAX);
                None
            }
            _ => None,
        }
    }

    fn module_type(&self) -> &str {
        self.kind.as_str()
    }

    fn captures_text(&self) -> bool {
        true
    }
}
