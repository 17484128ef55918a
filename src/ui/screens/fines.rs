use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Gauge, Paragraph, Widget, Wrap},
};

use crate::modules::catalog::{
    fines::format_rupees, FineStanding, FineStatus, FineSummary, MockDataStore,
};
use crate::modules::screens::{fines::POLICY_GUIDE, FinesScreen};
use crate::ui::{components::UiComponent, style::Theme};

pub fn render_fines(
    screen: &FinesScreen,
    store: &MockDataStore,
    fine_limit: u32,
    theme: &Theme,
    area: Rect,
    buf: &mut Buffer,
) {
    let summary = FineSummary::from_fines(&store.fines, fine_limit);
    let guide_height = if screen.show_policy_guide { 12 } else { 3 };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Limit gauge
            Constraint::Length(1),            // Advice
            Constraint::Min(3),               // Fines
            Constraint::Length(guide_height), // Policy guide
        ])
        .split(area);

    let gauge_color = match summary.standing {
        FineStanding::Good => theme.primary,
        FineStanding::Caution => theme.warning,
        FineStanding::Critical => theme.danger,
    };

    Gauge::default()
        .block(
            Block::bordered()
                .title(" Fine Limit Tracker ")
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(gauge_color)),
        )
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(summary.ratio())
        .label(format!(
            "{} of {} ({:.0}%)",
            format_rupees(summary.pending_total),
            format_rupees(summary.limit),
            summary.percentage
        ))
        .render(layout[0], buf);

    Paragraph::new(summary.standing.advice())
        .fg(gauge_color)
        .render(layout[1], buf);

    if store.fines.is_empty() {
        UiComponent::empty_message("No fines or warnings", None).render(layout[2], buf);
    } else {
        render_fine_list(screen, store, theme, layout[2], buf);
    }

    render_policy_guide(screen, theme, layout[3], buf);
}

fn render_fine_list(screen: &FinesScreen, store: &MockDataStore, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let mut lines = Vec::new();
    for (i, fine) in store.fines.iter().enumerate() {
        let is_selected = i == screen.selected;
        let status_color = match fine.status {
            FineStatus::Pending => theme.danger,
            FineStatus::Appealed => theme.warning,
            FineStatus::Paid => theme.primary,
        };
        let marker = if is_selected { "▶ " } else { "  " };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(
                fine.title.clone(),
                if is_selected { Style::default().fg(theme.text).bold() } else { Style::default().fg(theme.text) },
            ),
            Span::styled(format!("  {}  ", format_rupees(fine.amount)), Style::default().fg(theme.accent)),
            Span::styled(format!("[{}]", fine.status.as_str()), Style::default().fg(status_color)),
        ]));

        if screen.expanded == Some(i) {
            lines.push(Line::from(Span::styled(
                format!("    {}", fine.description),
                Style::default().fg(theme.muted),
            )));
            lines.push(Line::from(Span::styled(
                format!("    Due {}", fine.due_date),
                Style::default().fg(theme.muted).italic(),
            )));
        }
    }

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" Fines & Warnings ")
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.muted)),
        )
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn render_policy_guide(screen: &FinesScreen, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .title(" Regulatory Policy Guide (p) ")
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));

    if !screen.show_policy_guide {
        block.render(area, buf);
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        "MSME Compliance Guidelines",
        Style::default().fg(theme.accent).bold(),
    ))];
    for (heading, body) in POLICY_GUIDE {
        lines.push(Line::from(Span::styled(heading, Style::default().fg(theme.text).bold())));
        lines.push(Line::from(Span::styled(body, Style::default().fg(theme.muted))));
    }

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
