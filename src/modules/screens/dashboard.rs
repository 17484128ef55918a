use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::modules::catalog::{Carousel, MockDataStore};
use crate::modules::module_handler::ModuleHandler;
use crate::modules::navigation::Route;
use crate::util::io::event::AppEvent;

pub const NOTIFICATION_TITLE: &str = "Warning: Exceeding Waste Limit";
pub const NOTIFICATION_MESSAGE: &str = "You are approaching the fine limit for plastic waste. Consider switching to eco-friendly alternatives.";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardScreen {
    pub stories: Carousel,
    pub selected_sector: usize,
    pub show_notification: bool,
    sector_ids: Vec<String>,
}

impl DashboardScreen {
    pub fn new(store: &MockDataStore) -> Self {
        Self {
            stories: Carousel::new(store.business_owners.len()),
            selected_sector: 0,
            show_notification: false,
            sector_ids: store.sectors.iter().map(|s| s.id.clone()).collect(),
        }
    }
}

impl ModuleHandler for DashboardScreen {
    fn handle_key(&mut self, key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Left => {
                self.stories.prev();
                None
            }
            KeyCode::Right => {
                self.stories.next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_sector = super::step(self.selected_sector, self.sector_ids.len(), false);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_sector = super::step(self.selected_sector, self.sector_ids.len(), true);
                None
            }
            KeyCode::Enter => self
                .sector_ids
                .get(self.selected_sector)
                .map(|id| AppEvent::Navigate(Route::Sector(id.clone()))),
            KeyCode::Char('n') => {
                self.show_notification = !self.show_notification;
                None
            }
            KeyCode::Char('h') => Some(AppEvent::Navigate(Route::Health)),
            _ => None,
        }
    }

    fn module_type(&self) -> &str {
        "dashboard"
    }
}
