use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use std::time::Duration;

use crate::ui::style::Theme;

const LEAF_FRAMES: [&str; 4] = ["🌱", "🌿", "🍃", "🌿"];

pub fn render_splash(elapsed: Duration, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let frame = (elapsed.as_millis() / 250) as usize;
    let dots = ".".repeat(frame % 4);

    let lines = vec![
        Line::from(LEAF_FRAMES[frame % LEAF_FRAMES.len()]),
        Line::from(""),
        Line::from("Jugaad Guru").style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from("Sustainability with svalpa jugaad").style(
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        ),
        Line::from(""),
        Line::from(format!("Loading{:<3}", dots)).style(Style::default().fg(theme.accent)),
    ];

    let height = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let text_area = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height: height.min(area.height),
    };

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(text_area, buf);
}
