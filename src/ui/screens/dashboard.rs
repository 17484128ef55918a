use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, List, ListItem, Paragraph, Widget, Wrap},
};

use crate::modules::catalog::MockDataStore;
use crate::modules::screens::dashboard::{DashboardScreen, NOTIFICATION_MESSAGE, NOTIFICATION_TITLE};
use crate::modules::session::AppState;
use crate::ui::{
    components::UiComponent,
    style::{dim_unless_focused, Theme},
};

pub fn render_dashboard(
    screen: &DashboardScreen,
    store: &MockDataStore,
    state: &AppState,
    theme: &Theme,
    area: Rect,
    buf: &mut Buffer,
) {
    let notification_height = if screen.show_notification { 4 } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                   // Welcome
            Constraint::Length(notification_height), // Notification
            Constraint::Length(7),                   // Success stories
            Constraint::Min(3),                      // Sectors
        ])
        .split(area);

    let bell = if screen.show_notification { "🔔 (n to hide)" } else { "🔔 1 (n)" };
    Paragraph::new(Line::from(vec![
        Span::styled(format!("Welcome, {}", state.display_name()), Style::default().fg(theme.text).bold()),
        Span::raw("   "),
        Span::styled(bell, Style::default().fg(theme.warning)),
    ]))
    .render(layout[0], buf);

    if screen.show_notification {
        UiComponent::status(NOTIFICATION_TITLE, NOTIFICATION_MESSAGE, theme.warning).render(layout[1], buf);
    }

    render_story(screen, store, theme, layout[2], buf);
    render_sectors(screen, store, theme, layout[3], buf);
}

fn render_story(screen: &DashboardScreen, store: &MockDataStore, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let title = format!(
        " Success Stories ({}/{}) ←→ ",
        screen.stories.index() + 1,
        store.business_owners.len()
    );
    let block = Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.primary));

    let Some(owner) = store.business_owners.get(screen.stories.index()) else {
        UiComponent::empty_message("No stories yet", None).render(area, buf);
        return;
    };

    let text = Text::from(vec![
        Line::from(Span::styled(owner.name.clone(), Style::default().fg(theme.primary).bold())),
        Line::from(Span::styled(
            format!("{} • {}", owner.business, owner.sector),
            Style::default().fg(theme.muted),
        )),
        Line::from(owner.story.clone()),
    ]);

    Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_sectors(screen: &DashboardScreen, store: &MockDataStore, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let items: Vec<ListItem> = store
        .sectors
        .iter()
        .enumerate()
        .map(|(i, sector)| {
            let is_selected = i == screen.selected_sector;
            let marker = if is_selected { "▶ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    sector.name.clone(),
                    dim_unless_focused(is_selected, Style::default().fg(theme.text)),
                ),
                Span::styled(format!("  {}", sector.description), Style::default().fg(theme.muted)),
            ]))
        })
        .collect();

    List::new(items)
        .block(
            Block::bordered()
                .title(" Business Sectors ")
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.muted)),
        )
        .render(area, buf);
}
