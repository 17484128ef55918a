use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::modules::catalog::{MockDataStore, Redemption};
use crate::modules::screens::RewardsScreen;
use crate::modules::session::AppState;
use crate::ui::{components::UiComponent, style::Theme};

pub fn render_rewards(
    screen: &RewardsScreen,
    store: &MockDataStore,
    state: &AppState,
    theme: &Theme,
    area: Rect,
    buf: &mut Buffer,
) {
    let score = state.sustainability_score();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Green Score ", Style::default().fg(theme.muted)),
            Span::styled(score.to_string(), Style::default().fg(theme.primary).bold()),
        ]),
        Line::from(Span::styled(
            "Great Progress! You've saved approximately 30kg of plastic waste and reduced your carbon footprint by 15% this month!",
            Style::default().fg(theme.muted),
        )),
    ])
    .block(
        Block::bordered()
            .title(" Rewards & Coupons ")
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.primary)),
    )
    .wrap(Wrap { trim: true })
    .render(layout[0], buf);

    if store.rewards.is_empty() {
        UiComponent::empty_message("No rewards available", None).render(layout[1], buf);
        return;
    }

    let mut lines = Vec::new();
    for (i, reward) in store.rewards.iter().enumerate() {
        let is_selected = i == screen.selected;
        let redemption = reward.redemption(score);
        let badge_color = match redemption {
            Redemption::Available => theme.primary,
            Redemption::NeedsPoints(_) => theme.warning,
        };
        let marker = if is_selected { "▶ " } else { "  " };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(
                reward.title.clone(),
                if is_selected { Style::default().fg(theme.text).bold() } else { Style::default().fg(theme.text) },
            ),
            Span::styled(format!("  {} pts  ", reward.points), Style::default().fg(theme.accent)),
            Span::styled(format!("[{}]", redemption.label()), Style::default().fg(badge_color)),
        ]));

        if screen.expanded == Some(i) {
            lines.push(Line::from(Span::styled(
                format!("    {}", reward.description),
                Style::default().fg(theme.muted),
            )));
            if let Some(expiry) = &reward.expiry_date {
                lines.push(Line::from(Span::styled(
                    format!("    Valid until {}", expiry),
                    Style::default().fg(theme.muted).italic(),
                )));
            }
        }
    }

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" Available Rewards ")
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.muted)),
        )
        .wrap(Wrap { trim: false })
        .render(layout[1], buf);
}
