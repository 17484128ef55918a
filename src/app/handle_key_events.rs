use color_eyre::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, AppMode};
use crate::log_error;
use crate::modules::{assistant::AssistantKind, module_handler::ModuleHandler, navigation::BOTTOM_NAV};
use crate::util::io::event::AppEvent;

impl App {
    /// Handles the key events and updates the state of [`App`].
    ///
    /// Keys go to the focused overlay first, then to a screen that is taking
    /// text input, then to the global shortcuts, and finally to the screen.
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(());
        }

        if self.mode == AppMode::Splash {
            self.dismiss_splash();
            return Ok(());
        }

        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            self.events.send(AppEvent::Quit);
            return Ok(());
        }

        if let Some(kind) = self.overlay_focus {
            if let Some(event) = self.assistant_mut(kind).handle_key(key_event) {
                self.events.send(event);
            }
            return Ok(());
        }

        if !self.screen.handler().captures_text() {
            if let Some(event) = self.global_shortcut(key_event) {
                self.events.send(event);
                return Ok(());
            }
        }

        if let Some(event) = self.screen.handler_mut().handle_key(key_event) {
            self.events.send(event);
        }
        Ok(())
    }

    fn global_shortcut(&self, key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Esc | KeyCode::Backspace => Some(AppEvent::Back),
            KeyCode::Char('d') => Some(AppEvent::ToggleDarkMode),
            KeyCode::Char('o') => Some(AppEvent::Logout),
            KeyCode::Char('a') => Some(AppEvent::ToggleAssistant(AssistantKind::Voice)),
            KeyCode::Char('t') => Some(AppEvent::ToggleAssistant(AssistantKind::Telegram)),
            KeyCode::Char(ch @ '1'..='4') => {
                let index = ch as usize - '1' as usize;
                match BOTTOM_NAV[index].route() {
                    Ok(route) => Some(AppEvent::Navigate(route)),
                    Err(e) => {
                        log_error!("Bottom navigation: {}", e);
                        None
                    }
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::navigation::Route;
    use crate::modules::session::MemoryStorage;
    use crate::util::{config::AppConfig, io::event::{Event, EventHandler}};

    fn app() -> App {
        let mut app = App::with_storage(
            AppConfig::default(),
            Box::new(MemoryStorage::new()),
            EventHandler::detached(),
        )
        .unwrap();
        app.dismiss_splash();
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn queued(app: &mut App) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = app.events.try_next() {
            if let Event::App(app_event) = event {
                events.push(app_event);
            }
        }
        events
    }

    #[tokio::test]
    async fn splash_swallows_the_first_key() {
        let mut app = App::with_storage(
            AppConfig::default(),
            Box::new(MemoryStorage::new()),
            EventHandler::detached(),
        )
        .unwrap();
        app.handle_key_events(key(KeyCode::Char('q'))).unwrap();
        assert_eq!(app.mode, AppMode::Main);
        assert!(queued(&mut app).is_empty());
    }

    #[tokio::test]
    async fn auth_form_takes_letters_not_shortcuts() {
        let mut app = app();
        app.handle_key_events(key(KeyCode::Char('q'))).unwrap();
        assert!(queued(&mut app).is_empty());
        assert!(app.running);
    }

    #[tokio::test]
    async fn number_keys_follow_the_bottom_nav() {
        let mut app = app();
        app.reset_to(Route::Dashboard);
        app.handle_key_events(key(KeyCode::Char('4'))).unwrap();
        assert_eq!(queued(&mut app), vec![AppEvent::Navigate(Route::Fines)]);
    }

    #[tokio::test]
    async fn focused_overlay_gets_the_keys() {
        let mut app = app();
        app.reset_to(Route::Dashboard);
        app.toggle_assistant(AssistantKind::Telegram);

        // 'q' is typed into the chat, not treated as quit
        app.handle_key_events(key(KeyCode::Char('q'))).unwrap();
        assert_eq!(app.telegram.chat_input().get(), "q");
        assert!(queued(&mut app).is_empty());

        app.handle_key_events(key(KeyCode::Esc)).unwrap();
        assert_eq!(queued(&mut app), vec![AppEvent::ToggleAssistant(AssistantKind::Telegram)]);
    }
}
