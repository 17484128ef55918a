use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::modules::module_handler::ModuleHandler;
use crate::util::io::event::AppEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardsScreen {
    pub selected: usize,
    pub expanded: Option<usize>,
    count: usize,
}

impl RewardsScreen {
    pub fn new(count: usize) -> Self {
        Self { selected: 0, expanded: None, count }
    }
}

impl ModuleHandler for RewardsScreen {
    fn handle_key(&mut self, key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = super::step(self.selected, self.count, false);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = super::step(self.selected, self.count, true);
            }
            KeyCode::Enter | KeyCode::Char(' ') if self.count > 0 => {
                self.expanded = super::toggle_expanded(self.expanded, self.selected);
            }
            _ => {}
        }
        None
    }

    fn module_type(&self) -> &str {
        "rewards"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    #[test]
    fn enter_expands_then_collapses() {
        let mut screen = RewardsScreen::new(4);
        screen.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(screen.expanded, Some(1));
        screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(screen.expanded, None);
    }

    #[test]
    fn nothing_to_expand_when_empty() {
        let mut screen = RewardsScreen::new(0);
        screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(screen.expanded, None);
    }
}
