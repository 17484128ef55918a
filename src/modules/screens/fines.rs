use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::modules::module_handler::ModuleHandler;
use crate::util::io::event::AppEvent;

/// MSME compliance guidelines shown under the fines list, as (heading, body)
pub const POLICY_GUIDE: [(&str, &str); 4] = [
    (
        "Waste Management",
        "All businesses must segregate waste into biodegradable, non-biodegradable, and hazardous categories. Penalties apply for improper disposal.",
    ),
    (
        "Plastic Usage",
        "Single-use plastic is banned. Businesses must switch to alternatives or face fines of ₹5,000 to ₹25,000 depending on the scale of violation.",
    ),
    (
        "Water Conservation",
        "Businesses must implement water recycling systems. Wastage beyond permitted limits incurs penalties of ₹10,000.",
    ),
    (
        "Energy Efficiency",
        "Businesses are encouraged to use energy-efficient equipment. Tax benefits available for compliance.",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinesScreen {
    pub selected: usize,
    pub expanded: Option<usize>,
    pub show_policy_guide: bool,
    count: usize,
}

impl FinesScreen {
    pub fn new(count: usize) -> Self {
        Self {
            selected: 0,
            expanded: None,
            show_policy_guide: false,
            count,
        }
    }
}

impl ModuleHandler for FinesScreen {
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
            KeyCode::Char('p') => self.show_policy_guide = !self.show_policy_guide,
            _ => {}
        }
        None
    }

    fn module_type(&self) -> &str {
        "fines"
    }
}
