use ratatui::{
    layout::Alignment,
    prelude::{Color, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    /// Placeholder for an empty list, with an optional hint underneath
    pub fn empty_message<'a>(text: &'a str, hint: Option<&'a str>) -> Paragraph<'a> {
        let mut lines = vec![Line::from(text).bold()];
        if let Some(hint) = hint {
            lines.push(Line::from(hint).italic());
        }

        Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::symmetric(1, 1)),
            )
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}
