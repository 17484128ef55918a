use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::modules::catalog::{vendors::FILTER_CATEGORIES, Vendor, VendorQuery};
use crate::modules::module_handler::ModuleHandler;
use crate::util::io::event::AppEvent;

/// Disposal vendor directory with search, category filter and sort
#[derive(Debug, Clone, PartialEq)]
pub struct VendorsScreen {
    pub query: VendorQuery,
    pub searching: bool,
    pub show_filters: bool,
    pub filter_cursor: usize,
    pub selected: usize,
    /// Last contact / pickup action, shown until the next key
    pub notice: Option<String>,
    vendors: Vec<Vendor>,
}

impl VendorsScreen {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self {
            query: VendorQuery::default(),
            searching: false,
            show_filters: false,
            filter_cursor: 0,
            selected: 0,
            notice: None,
            vendors,
        }
    }

    pub fn results(&self) -> Vec<&Vendor> {
        self.query.apply(&self.vendors)
    }

    pub fn selected_vendor(&self) -> Option<&Vendor> {
        self.results().get(self.selected).copied()
    }

    fn clamp_selection(&mut self) {
        let len = self.results().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn handle_search_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Enter | KeyCode::Esc => self.searching = false,
            KeyCode::Backspace => {
                self.query.search.pop();
            }
            KeyCode::Char(ch) => self.query.search.push(ch),
            _ => {}
        }
        self.clamp_selection();
    }

    fn handle_filter_key(&mut self, key_event: KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Left => {
                self.filter_cursor = super::step(self.filter_cursor, FILTER_CATEGORIES.len(), false);
            }
            KeyCode::Right => {
                self.filter_cursor = super::step(self.filter_cursor, FILTER_CATEGORIES.len(), true);
            }
            KeyCode::Enter => {
                self.query.select_filter(FILTER_CATEGORIES[self.filter_cursor]);
                self.selected = 0;
            }
            _ => return false,
        }
        true
    }
}

impl ModuleHandler for VendorsScreen {
    fn handle_key(&mut self, key_event: KeyEvent) -> Option<AppEvent> {
        self.notice = None;

        if self.searching {
            self.handle_search_key(key_event);
            return None;
        }
        if self.show_filters && self.handle_filter_key(key_event) {
            return None;
        }

        match key_event.code {
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Char('f') => self.show_filters = !self.show_filters,
            KeyCode::Char('s') => {
                self.query.toggle_sort();
                self.selected = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = super::step(self.selected, self.results().len(), false);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = super::step(self.selected, self.results().len(), true);
            }
            KeyCode::Char('c') => {
                self.notice = self
                    .selected_vendor()
                    .map(|v| format!("Contacting {} at {}", v.name, v.contact));
            }
            KeyCode::Char('p') => {
                self.notice = self
                    .selected_vendor()
                    .map(|v| format!("Schedule pickup with {}", v.name));
            }
            _ => {}
        }
        None
    }

    fn module_type(&self) -> &str {
        "vendors"
    }

    fn captures_text(&self) -> bool {
        self.searching
    }
}
