use color_eyre::Result;

use super::App;
use crate::modules::{assistant::AssistantKind, navigation::Route, screens::ScreenState};
use crate::util::io::event::{AppEvent, Event};
use crate::{log_error, log_info};

impl App {
    pub async fn handle_app_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Navigate(route) => self.navigate(route),
            AppEvent::Back => {
                self.back();
            }
            AppEvent::SubmitLogin => self.submit_login(),
            AppEvent::LoginFinished { email, password } => self.finish_login(&email, &password),
            AppEvent::GuestLogin => {
                log_info!("Continuing as guest");
                self.reset_to(Route::Dashboard);
            }
            AppEvent::Logout => {
                self.session.logout()?;
                self.reset_assistants();
                self.reset_to(Route::Auth);
            }
            AppEvent::ToggleDarkMode => self.session.toggle_dark_mode(),
            AppEvent::ToggleAssistant(kind) => self.toggle_assistant(kind),
            AppEvent::AssistantSubmit(kind) => self.submit_to_assistant(kind),
            AppEvent::AssistantReply(kind, text) => self.assistant_mut(kind).receive_reply(text),
            AppEvent::Quit => self.quit(),
        }
        Ok(())
    }

    /// Login and sign-up both land here. The wait runs on its own task so the
    /// form keeps drawing "Signing in..." until [`AppEvent::LoginFinished`].
    fn submit_login(&mut self) {
        if self.session.state().is_loading {
            return;
        }
        let ScreenState::Auth(form) = &mut self.screen else {
            return;
        };
        form.error = None;
        let (email, password) = (form.email.clone(), form.password.clone());

        self.session.begin_login();
        let delay = self.session.login_delay();
        let sender = self.events.sender();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(Event::App(AppEvent::LoginFinished { email, password }));
        });
    }

    /// Failures stay on the form
    fn finish_login(&mut self, email: &str, password: &str) {
        match self.session.finish_login(email, password) {
            Ok(()) => self.reset_to(Route::Dashboard),
            Err(e) => {
                if let ScreenState::Auth(form) = &mut self.screen {
                    form.error = Some(format!("Login failed: {}", e));
                }
            }
        }
    }

    /// A failed hand-off leaves the input and the log untouched
    fn submit_to_assistant(&mut self, kind: AssistantKind) {
        if let Err(e) = self.assistant_mut(kind).submit_message() {
            log_error!("{} assistant could not queue a reply: {}", kind.as_str(), e);
        }
    }
}
