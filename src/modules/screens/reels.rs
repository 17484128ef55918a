use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::modules::catalog::{MockDataStore, ReelFeed};
use crate::modules::module_handler::ModuleHandler;
use crate::util::io::event::AppEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct ReelsScreen {
    pub feed: ReelFeed,
    reel_ids: Vec<String>,
}

impl ReelsScreen {
    pub fn new(store: &MockDataStore) -> Self {
        Self {
            feed: ReelFeed::new(store.reels.len()),
            reel_ids: store.reels.iter().map(|r| r.id.clone()).collect(),
        }
    }
}

impl ModuleHandler for ReelsScreen {
    fn handle_key(&mut self, key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.feed.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.feed.next(),
            KeyCode::Char('l') => {
                if let Some(id) = self.reel_ids.get(self.feed.index()) {
                    self.feed.toggle_like(id);
                }
            }
            KeyCode::Char('m') => self.feed.toggle_mute(),
            KeyCode::Char('c') => self.feed.toggle_comments(),
            _ => {}
        }
        None
    }

    fn module_type(&self) -> &str {
        "reels"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn press(screen: &mut ReelsScreen, ch: char) {
        screen.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
    }

    #[test]
    fn like_applies_to_the_current_reel() {
        let store = MockDataStore::load().unwrap();
        let mut screen = ReelsScreen::new(&store);
        press(&mut screen, 'j');
        press(&mut screen, 'l');
        assert!(screen.feed.is_liked("2"));
        assert!(!screen.feed.is_liked("1"));
    }

    #[test]
    fn mute_and_comments_toggle() {
        let store = MockDataStore::load().unwrap();
        let mut screen = ReelsScreen::new(&store);
        press(&mut screen, 'm');
        press(&mut screen, 'c');
        assert!(!screen.feed.muted);
        assert!(screen.feed.show_comments);
    }
}
