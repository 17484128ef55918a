use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::modules::module_handler::ModuleHandler;
use crate::util::io::event::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Phone,
    Password,
}

/// Login / sign-up form. Phone is only asked for when signing up.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub focus: AuthField,
    pub error: Option<String>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            focus: AuthField::Email,
            error: None,
        }
    }

    pub fn fields(&self) -> Vec<AuthField> {
        match self.mode {
            AuthMode::Login => vec![AuthField::Email, AuthField::Password],
            AuthMode::SignUp => vec![AuthField::Email, AuthField::Phone, AuthField::Password],
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        };
        if !self.fields().contains(&self.focus) {
            self.focus = AuthField::Email;
        }
        self.error = None;
    }

    fn cycle_focus(&mut self, forward: bool) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.focus = fields[next];
    }

    fn focused_value(&mut self) -> &mut String {
        match self.focus {
            AuthField::Email => &mut self.email,
            AuthField::Phone => &mut self.phone,
            AuthField::Password => &mut self.password,
        }
    }

    /// Password shown as bullets
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleHandler for AuthForm {
    fn handle_key(&mut self, key_event: KeyEvent) -> Option<AppEvent> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('c') if ctrl => Some(AppEvent::Quit),
            KeyCode::Char('n') if ctrl => {
                self.toggle_mode();
                None
            }
            KeyCode::Char('g') if ctrl => Some(AppEvent::GuestLogin),
            KeyCode::Enter => Some(AppEvent::SubmitLogin),
            KeyCode::Tab | KeyCode::Down => {
                self.cycle_focus(true);
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.cycle_focus(false);
                None
            }
            KeyCode::Backspace => {
                self.focused_value().pop();
                None
            }
            KeyCode::Char(ch) => {
                self.focused_value().push(ch);
                None
            }
            _ => None,
        }
    }

    fn module_type(&self) -> &str {
        "auth"
    }

    fn captures_text(&self) -> bool {
        true
    }
}
