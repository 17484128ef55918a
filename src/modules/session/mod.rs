// src/modules/session/mod.rs
//! Application state and the only code allowed to change it

pub mod local_storage;
mod login;
mod logout;
mod restore;

pub use local_storage::{LocalStorage, MemoryStorage, AUTH_FLAG_KEY};

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub business_name: Option<String>,
    pub sector: Option<String>,
    pub profile_image: Option<String>,
    pub sustainability_score: u32,
}

/// Snapshot handed to views. Views read it; only [`SessionController`] writes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub dark_mode: bool,
    pub assistant_active: bool,
}

impl AppState {
    /// Name shown in greetings, "Guest" when nobody is signed in
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("Guest")
    }

    pub fn sustainability_score(&self) -> u32 {
        self.user.as_ref().map(|u| u.sustainability_score).unwrap_or(0)
    }
}

/// Owns the [`AppState`] and the storage behind the signed-in flag
#[derive(Debug)]
pub struct SessionController {
    state: AppState,
    storage: Box<dyn LocalStorage>,
    mock_user: User,
    login_delay: Duration,
}

impl SessionController {
    pub fn new(storage: Box<dyn LocalStorage>, mock_user: User, login_delay: Duration) -> Self {
        Self {
            state: AppState::default(),
            storage,
            mock_user,
            login_delay,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.state.user = user;
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.state.dark_mode = dark_mode;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
    }

    /// Shows or hides the voice assistant panel
    pub fn toggle_assistant(&mut self) {
        self.state.assistant_active = !self.state.assistant_active;
    }
}
