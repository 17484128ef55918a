use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, Paragraph, Widget, Wrap},
};

use crate::modules::catalog::MockDataStore;
use crate::modules::screens::SectorScreen;
use crate::modules::session::AppState;
use crate::ui::{components::UiComponent, style::Theme};

const SECTOR_TIPS: [(&str, &str); 3] = [
    (
        "Reduce Energy Usage",
        "Schedule equipment maintenance regularly to ensure optimal energy efficiency.",
    ),
    (
        "Waste Segregation",
        "Separate waste into organic, recyclable, and hazardous to maximize recycling potential.",
    ),
    (
        "Sustainable Sourcing",
        "Use locally-sourced, biodegradable materials to reduce your carbon footprint.",
    ),
];

pub fn render_sector(
    screen: &SectorScreen,
    store: &MockDataStore,
    state: &AppState,
    theme: &Theme,
    area: Rect,
    buf: &mut Buffer,
) {
    let Some(sector) = &screen.sector else {
        UiComponent::empty_message("Sector not found", Some("Esc to go back")).render(area, buf);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                               // Sector header
            Constraint::Length(screen.actions.len() as u16 + 2), // Actions
            Constraint::Min(3),                                  // Tips and stories
        ])
        .split(area);

    Paragraph::new(vec![
        Line::from(Span::styled(sector.name.clone(), Style::default().fg(theme.primary).bold())),
        Line::from(sector.description.clone()),
        Line::from(Span::styled(
            format!("{} • Sustainability score {}", state.display_name(), state.sustainability_score()),
            Style::default().fg(theme.muted),
        )),
    ])
    .wrap(Wrap { trim: true })
    .render(layout[0], buf);

    let actions: Vec<ListItem> = screen
        .actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let is_selected = i == screen.selected;
            let style = match (is_selected, action.destination.is_some()) {
                (true, _) => Style::default().fg(theme.primary).bold(),
                (false, true) => Style::default().fg(theme.text),
                (false, false) => Style::default().fg(theme.muted),
            };
            let marker = if is_selected { "▶ " } else { "  " };
            ListItem::new(Line::from(Span::styled(format!("{}{}", marker, action.label), style)))
        })
        .collect();

    List::new(actions)
        .block(
            Block::bordered()
                .title(" Actions ")
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.muted)),
        )
        .render(layout[1], buf);

    let mut lines: Vec<Line> = SECTOR_TIPS
        .iter()
        .flat_map(|(title, body)| {
            [
                Line::from(Span::styled(*title, Style::default().fg(theme.accent).bold())),
                Line::from(*body),
            ]
        })
        .collect();

    let owners = store.owners_in_sector(&sector.name);
    if !owners.is_empty() {
        lines.push(Line::from(""));
        for owner in owners {
            lines.push(Line::from(Span::styled(
                format!("{} ({}): {}", owner.name, owner.business, owner.story),
                Style::default().fg(theme.muted),
            )));
        }
    }

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" Sustainability Tips ")
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.muted)),
        )
        .wrap(Wrap { trim: true })
        .render(layout[2], buf);
}
