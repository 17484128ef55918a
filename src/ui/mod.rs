pub mod components;
pub mod screens;
pub mod style;
pub mod widgets;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Widget},
};

use crate::app::{App, AppMode};
use crate::modules::{assistant::AssistantKind, screens::ScreenState};
use crate::ui::{components::UiComponent, style::Theme};

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = Theme::new(self.session.state().dark_mode);
        Block::default().style(theme.base()).render(area, buf);

        if self.mode == AppMode::Splash {
            screens::splash::render_splash(self.start_time.elapsed(), &theme, area, buf);
            return;
        }

        let route = self.router.current().clone();
        let nav_height = if route.shows_assistants() { 3 } else { 0 };

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),          // Header
                Constraint::Min(1),             // Screen
                Constraint::Length(nav_height), // Bottom navigation
                Constraint::Length(1),          // Help
            ])
            .split(area);

        widgets::header::render_header(self, &route, &theme, main_layout[0], buf);

        let state = self.session.state();
        let content = main_layout[1];
        match &self.screen {
            ScreenState::Auth(form) => screens::auth::render_auth(form, state, &theme, content, buf),
            ScreenState::Dashboard(screen) => {
                screens::dashboard::render_dashboard(screen, &self.store, state, &theme, content, buf)
            }
            ScreenState::Sector(screen) => {
                screens::sector::render_sector(screen, &self.store, state, &theme, content, buf)
            }
            ScreenState::Rewards(screen) => {
                screens::rewards::render_rewards(screen, &self.store, state, &theme, content, buf)
            }
            ScreenState::Fines(screen) => screens::fines::render_fines(
                screen,
                &self.store,
                self.config.fine_limit,
                &theme,
                content,
                buf,
            ),
            ScreenState::Vendors(screen) => screens::vendors::render_vendors(screen, &theme, content, buf),
            ScreenState::Health(screen) => {
                screens::health::render_health(screen, &self.store, &theme, content, buf)
            }
            ScreenState::Reels(screen) => {
                screens::reels::render_reels(screen, &self.store, &theme, content, buf)
            }
        }

        if route.shows_assistants() {
            widgets::bottom_nav::render_bottom_nav(&route, &theme, main_layout[2], buf);
        }

        UiComponent::help(help_text(self)).render(main_layout[3], buf);

        self.render_overlays(&theme, content, buf);
    }
}

impl App {
    fn render_overlays(&mut self, theme: &Theme, area: Rect, buf: &mut Buffer) {
        let voice_open = self.is_assistant_visible(AssistantKind::Voice);
        let telegram_open = self.is_assistant_visible(AssistantKind::Telegram);
        let focus = self.overlay_focus;

        // Side by side when both are open, otherwise the open one takes the right side
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let (voice_area, telegram_area) = match (voice_open, telegram_open) {
            (true, true) => (halves[1], halves[0]),
            _ => (halves[1], halves[1]),
        };

        if voice_open {
            let is_focused = focus == Some(AssistantKind::Voice);
            widgets::assistant_panel::render_assistant_panel(&mut self.voice, is_focused, theme, voice_area, buf);
        }
        if telegram_open {
            let is_focused = focus == Some(AssistantKind::Telegram);
            widgets::assistant_panel::render_assistant_panel(&mut self.telegram, is_focused, theme, telegram_area, buf);
        }
    }
}

fn help_text(app: &App) -> &'static str {
    if app.overlay_focus.is_some() {
        return "Type a message • Enter: Send • ↑↓: Scroll • Ctrl+R: Record (voice) • Esc: Close";
    }
    match &app.screen {
        ScreenState::Auth(_) => "Tab: Next field • Enter: Submit • Ctrl+N: Login/Sign up • Ctrl+G: Guest • Esc: Quit",
        ScreenState::Dashboard(_) => "←→: Stories • ↑↓: Sectors • Enter: Open • n: Alerts • h: Health • a/t: Assistants • q: Quit",
        ScreenState::Sector(_) => "↑↓: Select • Enter: Open • Esc: Back • 1-4: Navigate",
        ScreenState::Rewards(_) => "↑↓: Select • Enter: Details • Esc: Back",
        ScreenState::Fines(_) => "↑↓: Select • Enter: Details • p: Policy guide • Esc: Back",
        ScreenState::Vendors(screen) if screen.searching => "Type to search • Enter: Done",
        ScreenState::Vendors(_) => "/: Search • f: Filters • s: Sort • c: Contact • p: Pickup • Esc: Back",
        ScreenState::Health(_) => "Tab: Switch tab • Esc: Back",
        ScreenState::Reels(_) => "↑↓: Reels • l: Like • m: Mute • c: Comments • Esc: Back",
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
