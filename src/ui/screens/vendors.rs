use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::modules::catalog::vendors::FILTER_CATEGORIES;
use crate::modules::screens::VendorsScreen;
use crate::ui::{components::UiComponent, style::Theme};

pub fn render_vendors(screen: &VendorsScreen, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let filter_height = if screen.show_filters { 3 } else { 0 };
    let notice_height = if screen.notice.is_some() { 3 } else { 0 };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Search
            Constraint::Length(filter_height), // Filter chips
            Constraint::Min(3),                // Results
            Constraint::Length(notice_height), // Contact / pickup notice
        ])
        .split(area);

    let search_text = if screen.query.search.is_empty() && !screen.searching {
        "Search vendors or services (/)".to_string()
    } else {
        screen.query.search.clone()
    };
    Paragraph::new(search_text)
        .block(
            Block::bordered()
                .title(format!(" Search • Sort: {} (s) ", screen.query.sort.label()))
                .border_type(BorderType::Rounded)
                .border_style(theme.border(screen.searching)),
        )
        .render(layout[0], buf);

    if screen.show_filters {
        let chips: Vec<Span> = FILTER_CATEGORIES
            .iter()
            .enumerate()
            .flat_map(|(i, category)| {
                let is_active = screen.query.filter.as_deref() == Some(*category);
                let mut style = if is_active {
                    Style::default().fg(theme.background).bg(theme.primary)
                } else {
                    Style::default().fg(theme.text)
                };
                if i == screen.filter_cursor {
                    style = style.underlined();
                }
                [Span::styled(format!(" {} ", category), style), Span::raw(" ")]
            })
            .collect();

        Paragraph::new(Line::from(chips))
            .block(
                Block::bordered()
                    .title(" Filters (←→, Enter) ")
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.muted)),
            )
            .render(layout[1], buf);
    }

    let results = screen.results();
    if results.is_empty() {
        UiComponent::empty_message("No vendors found", Some("Try adjusting your filters or search query"))
            .render(layout[2], buf);
    } else {
        let mut lines = Vec::new();
        for (i, vendor) in results.iter().enumerate() {
            let is_selected = i == screen.selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let name_style = if is_selected {
                Style::default().fg(theme.primary).bold()
            } else {
                Style::default().fg(theme.text)
            };

            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(vendor.name.clone(), name_style),
                Span::styled(format!("  ★ {:.1}", vendor.rating), Style::default().fg(theme.warning)),
                Span::styled(format!("  {}", vendor.distance), Style::default().fg(theme.accent)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {} • {}", vendor.service, vendor.address),
                Style::default().fg(theme.muted),
            )));
            if is_selected {
                lines.push(Line::from(Span::styled(
                    format!("    {}   c: Contact Now   p: Schedule Pickup", vendor.contact),
                    Style::default().fg(theme.muted).italic(),
                )));
            }
        }

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(format!(" Disposal Vendors ({}) ", results.len()))
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.muted)),
            )
            .wrap(Wrap { trim: false })
            .render(layout[2], buf);
    }

    if let Some(notice) = &screen.notice {
        UiComponent::status("Notice", notice, theme.accent).render(layout[3], buf);
    }
}
