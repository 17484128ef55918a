// src/modules/module_handler.rs

use ratatui::crossterm::event::KeyEvent;
use std::fmt::Debug;

use crate::util::io::event::AppEvent;

/// Key handling for a focused piece of the UI (a screen or an overlay).
/// Returns an [`AppEvent`] when the key means something beyond local state.
pub trait ModuleHandler: Send + Debug {
    fn handle_key(&mut self, key_event: KeyEvent) -> Option<AppEvent>;
    fn module_type(&self) -> &str;

    /// True while the handler wants raw text (an input box has focus), so
    /// global shortcuts must not steal letters.
    fn captures_text(&self) -> bool {
        false
    }
}
