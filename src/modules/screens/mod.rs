// src/modules/screens/mod.rs
//! Per-screen view state. Rebuilt on every navigation, so nothing here
//! outlives the visit to its screen.

pub mod auth;
pub mod dashboard;
pub mod fines;
pub mod health;
pub mod reels;
pub mod rewards;
pub mod sector;
pub mod vendors;

pub use auth::{AuthField, AuthForm, AuthMode};
pub use dashboard::DashboardScreen;
pub use fines::FinesScreen;
pub use health::{HealthScreen, HealthTab};
pub use reels::ReelsScreen;
pub use rewards::RewardsScreen;
pub use sector::SectorScreen;
pub use vendors::VendorsScreen;

use crate::modules::{catalog::MockDataStore, module_handler::ModuleHandler, navigation::Route};

#[derive(Debug)]
pub enum ScreenState {
    Auth(AuthForm),
    Dashboard(DashboardScreen),
    Sector(SectorScreen),
    Rewards(RewardsScreen),
    Fines(FinesScreen),
    Vendors(VendorsScreen),
    Health(HealthScreen),
    Reels(ReelsScreen),
}

impl ScreenState {
    pub fn for_route(route: &Route, store: &MockDataStore) -> Self {
        match route {
            Route::Auth => ScreenState::Auth(AuthForm::new()),
            Route::Dashboard => ScreenState::Dashboard(DashboardScreen::new(store)),
            Route::Sector(id) => ScreenState::Sector(SectorScreen::new(store, id)),
            Route::Rewards => ScreenState::Rewards(RewardsScreen::new(store.rewards.len())),
            Route::Fines => ScreenState::Fines(FinesScreen::new(store.fines.len())),
            Route::Vendors => ScreenState::Vendors(VendorsScreen::new(store.vendors.clone())),
            Route::Health => ScreenState::Health(HealthScreen::new()),
            Route::Reels => ScreenState::Reels(ReelsScreen::new(store)),
        }
    }

    pub fn handler(&self) -> &dyn ModuleHandler {
        match self {
            ScreenState::Auth(s) => s,
            ScreenState::Dashboard(s) => s,
            ScreenState::Sector(s) => s,
            ScreenState::Rewards(s) => s,
            ScreenState::Fines(s) => s,
            ScreenState::Vendors(s) => s,
            ScreenState::Health(s) => s,
            ScreenState::Reels(s) => s,
        }
    }

    pub fn handler_mut(&mut self) -> &mut dyn ModuleHandler {
        match self {
            ScreenState::Auth(s) => s,
            ScreenState::Dashboard(s) => s,
            ScreenState::Sector(s) => s,
            ScreenState::Rewards(s) => s,
            ScreenState::Fines(s) => s,
            ScreenState::Vendors(s) => s,
            ScreenState::Health(s) => s,
            ScreenState::Reels(s) => s,
        }
    }
}

/// Moves a list cursor up or down within `len` items
pub(crate) fn step(selected: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (selected + 1).min(len - 1)
    } else {
        selected.saturating_sub(1)
    }
}

/// Opens the item, or closes it if it is already open
pub(crate) fn toggle_expanded(expanded: Option<usize>, selected: usize) -> Option<usize> {
    if expanded == Some(selected) { None } else { Some(selected) }
}
