// src/app/mod.rs
//! Top-level application: owns the session, the router, the current screen
//! and both assistant overlays, and turns events into state changes.

mod handle_app_event;
mod handle_key_events;
mod new;
mod run;

use std::time::Instant;

use crate::modules::{
    assistant::{AssistantHandler, AssistantKind},
    catalog::MockDataStore,
    navigation::{Route, Router},
    screens::ScreenState,
    session::SessionController,
};
use crate::util::{config::AppConfig, io::event::EventHandler};
use crate::log_debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Main,
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub mode: AppMode,
    pub start_time: Instant,
    pub config: AppConfig,
    pub store: MockDataStore,
    pub session: SessionController,
    pub router: Router,
    /// View state for `router.current()`
    pub screen: ScreenState,
    pub voice: AssistantHandler,
    pub telegram: AssistantHandler,
    pub telegram_open: bool,
    /// Overlay that receives keys, if any
    pub overlay_focus: Option<AssistantKind>,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn dismiss_splash(&mut self) {
        self.mode = AppMode::Main;
    }

    pub fn navigate(&mut self, route: Route) {
        if &route == self.router.current() {
            return;
        }
        self.router.navigate(route);
        self.rebuild_screen();
    }

    /// Returns false when already at the first screen
    pub fn back(&mut self) -> bool {
        let moved = self.router.back();
        if moved {
            self.rebuild_screen();
        }
        moved
    }

    /// Drops history and starts over at `route`
    pub fn reset_to(&mut self, route: Route) {
        self.router.reset(route);
        self.rebuild_screen();
    }

    fn rebuild_screen(&mut self) {
        let route = self.router.current();
        log_debug!("Showing {}", route.path());
        self.screen = ScreenState::for_route(route, &self.store);
        if !route.shows_assistants() {
            self.overlay_focus = None;
        }
    }

    pub fn assistant(&self, kind: AssistantKind) -> &AssistantHandler {
        match kind {
            AssistantKind::Voice => &self.voice,
            AssistantKind::Telegram => &self.telegram,
        }
    }

    pub fn assistant_mut(&mut self, kind: AssistantKind) -> &mut AssistantHandler {
        match kind {
            AssistantKind::Voice => &mut self.voice,
            AssistantKind::Telegram => &mut self.telegram,
        }
    }

    /// Open flag only; overlays are also hidden on routes without assistants
    pub fn is_assistant_open(&self, kind: AssistantKind) -> bool {
        match kind {
            AssistantKind::Voice => self.session.state().assistant_active,
            AssistantKind::Telegram => self.telegram_open,
        }
    }

    pub fn is_assistant_visible(&self, kind: AssistantKind) -> bool {
        self.router.current().shows_assistants() && self.is_assistant_open(kind)
    }

    /// Closes both overlays and starts both conversations over. The old reply
    /// workers are dropped with their handlers, taking queued replies with them.
    pub fn reset_assistants(&mut self) {
        self.telegram_open = false;
        if self.session.state().assistant_active {
            self.session.toggle_assistant();
        }
        self.overlay_focus = None;
        self.voice = new::spawn_assistant(AssistantKind::Voice, &self.config, &self.events);
        self.telegram = new::spawn_assistant(AssistantKind::Telegram, &self.config, &self.events);
    }

    pub fn toggle_assistant(&mut self, kind: AssistantKind) {
        if !self.router.current().shows_assistants() {
            return;
        }

        match kind {
            AssistantKind::Voice => self.session.toggle_assistant(),
            AssistantKind::Telegram => self.telegram_open = !self.telegram_open,
        }

        self.overlay_focus = if self.is_assistant_open(kind) {
            Some(kind)
        } else {
            // Hand keys to whichever overlay is still open
            [AssistantKind::Voice, AssistantKind::Telegram]
                .into_iter()
                .find(|other| *other != kind && self.is_assistant_open(*other))
        };
    }
}
