use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::modules::navigation::Route;
use crate::ui::style::Theme;

pub fn render_header(app: &App, route: &Route, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    block.render(area, buf);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    Paragraph::new(format!("🌿 Jugaad Guru • {}", route.title()))
        .fg(theme.primary)
        .bold()
        .render(columns[0], buf);

    let state = app.session.state();
    let mode = if state.dark_mode { "☾" } else { "☀" };
    let right = if route.shows_assistants() {
        format!("{} • Score {} {}", state.display_name(), state.sustainability_score(), mode)
    } else {
        mode.to_string()
    };
    Paragraph::new(right)
        .fg(theme.muted)
        .alignment(Alignment::Right)
        .render(columns[1], buf);
}
