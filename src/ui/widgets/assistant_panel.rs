use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::modules::assistant::{AssistantHandler, AssistantKind, ChatInput};
use crate::modules::conversation::Origin;
use crate::ui::style::Theme;

/// Floating chat window for one assistant. Takes `&mut` to keep the scroll
/// offset inside the rendered history.
pub fn render_assistant_panel(
    handler: &mut AssistantHandler,
    is_focused: bool,
    theme: &Theme,
    area: Rect,
    buf: &mut Buffer,
) {
    let kind = handler.kind();
    Clear.render(area, buf);

    let block = Block::bordered()
        .title(format!(" {} ", kind.title()))
        .title_bottom(Line::from(format!(" {} ", kind.subtitle())).italic())
        .border_type(BorderType::Rounded)
        .border_style(theme.border(is_focused))
        .style(theme.base());
    let inner = block.inner(area);
    block.render(area, buf);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // History
            Constraint::Length(1), // Typing indicator
            Constraint::Length(3), // Input
        ])
        .split(inner);

    render_history(handler, theme, layout[0], buf);

    if handler.is_processing() {
        Paragraph::new(kind.processing_label())
            .style(Style::default().fg(theme.muted).italic())
            .render(layout[1], buf);
    }

    render_input(handler, is_focused, theme, layout[2], buf);
}

fn render_history(handler: &mut AssistantHandler, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let kind = handler.kind();
    let mut lines = Vec::new();

    for message in handler.conversation().messages() {
        let (label, color) = match message.origin {
            Origin::User => ("You", theme.accent),
            Origin::Assistant => (assistant_label(kind), theme.primary),
        };
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", message.sent_at.format("%H:%M")),
                Style::default().fg(theme.muted),
            ),
        ]));
        for text_line in message.text.lines() {
            lines.push(Line::from(text_line.to_string()));
        }
        lines.push(Line::from(""));
    }

    let texts: Vec<&str> = handler
        .conversation()
        .messages()
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    let max_scroll = ChatInput::calculate_max_scroll(&texts, area.height as usize);
    let chat_input = handler.chat_input_mut();
    chat_input.clamp_scroll(max_scroll);

    Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .scroll((chat_input.scroll_offset as u16, 0))
        .render(area, buf);
}

fn render_input(handler: &AssistantHandler, is_focused: bool, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let (text, title) = if handler.is_recording() {
        ("🎤 Listening...".to_string(), " Ctrl+R to stop ")
    } else if handler.chat_input().get().is_empty() {
        let hint = match handler.kind() {
            AssistantKind::Voice => "Type or press Ctrl+R to speak",
            AssistantKind::Telegram => "Ask about energy, packaging or water",
        };
        (hint.to_string(), " Message ")
    } else {
        (format!("> {}", handler.chat_input().get()), " Message ")
    };

    let style = if handler.chat_input().get().is_empty() && !handler.is_recording() {
        Style::default().fg(theme.muted).italic()
    } else {
        Style::default().fg(theme.warning)
    };

    Paragraph::new(text)
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded)
                .border_style(theme.border(is_focused)),
        )
        .style(style)
        .alignment(Alignment::Left)
        .render(area, buf);
}

fn assistant_label(kind: AssistantKind) -> &'static str {
    match kind {
        AssistantKind::Voice => "Assistant",
        AssistantKind::Telegram => "Jugaad Guru",
    }
}
