use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::modules::navigation::{Route, BOTTOM_NAV};
use crate::ui::style::{dim_unless_focused, Theme};

pub fn render_bottom_nav(route: &Route, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let current_path = route.path();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, BOTTOM_NAV.len() as u32); BOTTOM_NAV.len()])
        .split(area);

    for (i, item) in BOTTOM_NAV.iter().enumerate() {
        let is_active = item.is_active(&current_path);
        let color = if is_active { theme.primary } else { theme.muted };

        Paragraph::new(format!("{} {}", i + 1, item.label))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.muted)),
            )
            .style(dim_unless_focused(is_active, Style::default().fg(color)))
            .alignment(Alignment::Center)
            .render(cells[i], buf);
    }
}
