// src/modules/navigation/mod.rs
//! Path-based routes and the navigation history between screens

mod router;

pub use router::Router;

use serde::{Deserialize, Serialize};

use crate::error::{JugaadError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// "/" - login and sign-up
    Auth,
    Dashboard,
    /// "/sector/:id"
    Sector(String),
    Reels,
    Rewards,
    Fines,
    Vendors,
    Health,
}

impl Route {
    /// Query strings and fragments are ignored, as is a trailing slash.
    pub fn parse(path: &str) -> Result<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        let route = match trimmed {
            "" => Route::Auth,
            "/dashboard" => Route::Dashboard,
            "/reels" => Route::Reels,
            "/rewards" => Route::Rewards,
            "/fines" => Route::Fines,
            "/vendors" => Route::Vendors,
            "/health" => Route::Health,
            other => match other.strip_prefix("/sector/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Sector(id.to_string()),
                _ => return Err(JugaadError::UnknownRoute(path.to_string())),
            },
        };
        Ok(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Auth => "/".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Sector(id) => format!("/sector/{}", id),
            Route::Reels => "/reels".to_string(),
            Route::Rewards => "/rewards".to_string(),
            Route::Fines => "/fines".to_string(),
            Route::Vendors => "/vendors".to_string(),
            Route::Health => "/health".to_string(),
        }
    }

    /// The floating assistant widgets are hidden on the auth screen only
    pub fn shows_assistants(&self) -> bool {
        !matches!(self, Route::Auth)
    }

    pub fn title(&self) -> &str {
        match self {
            Route::Auth => "Welcome",
            Route::Dashboard => "Home",
            Route::Sector(_) => "Sector Profile",
            Route::Reels => "Reels",
            Route::Rewards => "Rewards & Coupons",
            Route::Fines => "Fines & Warnings",
            Route::Vendors => "Disposal Vendors",
            Route::Health => "Health & Safety",
        }
    }
}

/// Entries of the bottom navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const BOTTOM_NAV: [NavItem; 4] = [
    NavItem { path: "/dashboard", label: "Home" },
    NavItem { path: "/rewards", label: "Rewards" },
    NavItem { path: "/reels", label: "Reels" },
    NavItem { path: "/fines", label: "Alerts" },
];

impl NavItem {
    /// Home only lights up on an exact match, the others on a prefix
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.path == "/dashboard" {
            current_path == "/dashboard"
        } else {
            current_path.starts_with(self.path)
        }
    }

    pub fn route(&self) -> Result<Route> {
        Route::parse(self.path)
    }
}

/// Buttons on a sector profile. Profile and score have nowhere to go yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorAction {
    pub label: &'static str,
    pub destination: Option<Route>,
}

pub fn sector_actions() -> Vec<SectorAction> {
    vec![
        SectorAction { label: "My Profile", destination: None },
        SectorAction { label: "Rewards & Coupons", destination: Some(Route::Rewards) },
        SectorAction { label: "Fines & Warnings", destination: Some(Route::Fines) },
        SectorAction { label: "Sustainability Score", destination: None },
        SectorAction { label: "Disposal Vendors", destination: Some(Route::Vendors) },
        SectorAction { label: "Health", destination: Some(Route::Health) },
    ]
}
