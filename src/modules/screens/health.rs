use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::modules::module_handler::ModuleHandler;
use crate::util::io::event::AppEvent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HealthTab {
    #[default]
    Tips,
    Camps,
}

impl HealthTab {
    pub fn title(&self) -> &'static str {
        match self {
            HealthTab::Tips => "Health Tips",
            HealthTab::Camps => "Health Camps",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthScreen {
    pub tab: HealthTab,
}

impl HealthScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModuleHandler for HealthScreen {
    fn handle_key(&mut self, key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                self.tab = match self.tab {
                    HealthTab::Tips => HealthTab::Camps,
                    HealthTab::Camps => HealthTab::Tips,
                };
            }
            _ => {}
        }
        None
    }

    fn module_type(&self) -> &str {
        "health"
    }
}
