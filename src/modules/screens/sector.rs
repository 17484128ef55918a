use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::log_warn;
use crate::modules::catalog::{MockDataStore, Sector};
use crate::modules::module_handler::ModuleHandler;
use crate::modules::navigation::{sector_actions, SectorAction};
use crate::util::io::event::AppEvent;

/// Sector profile with its action buttons. `sector` is `None` for an unknown id.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorScreen {
    pub sector: Option<Sector>,
    pub actions: Vec<SectorAction>,
    pub selected: usize,
}

impl SectorScreen {
    pub fn new(store: &MockDataStore, id: &str) -> Self {
        let sector = match store.require_sector(id) {
            Ok(sector) => Some(sector.clone()),
            Err(e) => {
                log_warn!("{}", e);
                None
            }
        };
        Self {
            sector,
            actions: sector_actions(),
            selected: 0,
        }
    }
}

impl ModuleHandler for SectorScreen {
    fn handle_key(&mut self, key_event: KeyEvent) -> Option<AppEvent> {
        if self.sector.is_none() {
            return None;
        }
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = super::step(self.selected, self.actions.len(), false);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = super::step(self.selected, self.actions.len(), true);
                None
            }
            KeyCode::Enter => self
                .actions
                .get(self.selected)
                .and_then(|action| action.destination.clone())
                .map(AppEvent::Navigate),
            _ => None,
        }
    }

    fn module_type(&self) -> &str {
        "sector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::navigation::Route;
    use ratatui::crossterm::event::KeyModifiers;

    fn press(screen: &mut SectorScreen, code: KeyCode) -> Option<AppEvent> {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn profile_button_goes_nowhere() {
        let store = MockDataStore::load().unwrap();
        let mut screen = SectorScreen::new(&store, "3");
        assert_eq!(screen.sector.as_ref().map(|s| s.name.as_str()), Some("Textile"));
        assert_eq!(press(&mut screen, KeyCode::Enter), None);
    }

    #[test]
    fn fines_button_navigates() {
        let store = MockDataStore::load().unwrap();
        let mut screen = SectorScreen::new(&store, "1");
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Down);
        assert_eq!(press(&mut screen, KeyCode::Enter), Some(AppEvent::Navigate(Route::Fines)));
    }

    #[test]
    fn unknown_sector_is_inert() {
        let store = MockDataStore::load().unwrap();
        let mut screen = SectorScreen::new(&store, "99");
        assert!(screen.sector.is_none());
        assert_eq!(press(&mut screen, KeyCode::Enter), None);
    }
}
