use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Tabs, Widget, Wrap},
};

use crate::modules::catalog::MockDataStore;
use crate::modules::screens::{HealthScreen, HealthTab};
use crate::ui::{components::UiComponent, style::Theme};

pub fn render_health(screen: &HealthScreen, store: &MockDataStore, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let selected = match screen.tab {
        HealthTab::Tips => 0,
        HealthTab::Camps => 1,
    };
    Tabs::new(vec![HealthTab::Tips.title(), HealthTab::Camps.title()])
        .block(
            Block::bordered()
                .title(" Health ")
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.muted)),
        )
        .select(selected)
        .highlight_style(Style::default().fg(theme.primary).bold())
        .render(layout[0], buf);

    let mut lines = Vec::new();
    match screen.tab {
        HealthTab::Tips => {
            for tip in &store.health_tips {
                lines.push(Line::from(Span::styled(tip.title.clone(), Style::default().fg(theme.accent).bold())));
                lines.push(Line::from(tip.description.clone()));
                lines.push(Line::from(""));
            }
        }
        HealthTab::Camps => {
            for camp in &store.health_camps {
                lines.push(Line::from(Span::styled(camp.title.clone(), Style::default().fg(theme.accent).bold())));
                lines.push(Line::from(format!("📅 {} • {}", camp.display_date(), camp.time)));
                lines.push(Line::from(format!("📍 {}", camp.location)));
                lines.push(Line::from(Span::styled(
                    format!("{} • {}", camp.organizer, camp.contact),
                    Style::default().fg(theme.muted),
                )));
                lines.push(Line::from(""));
            }
        }
    }

    if lines.is_empty() {
        UiComponent::empty_message("Nothing scheduled", None).render(layout[1], buf);
        return;
    }

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.muted)),
        )
        .wrap(Wrap { trim: true })
        .render(layout[1], buf);
}
