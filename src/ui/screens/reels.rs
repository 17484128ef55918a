use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::modules::catalog::MockDataStore;
use crate::modules::screens::ReelsScreen;
use crate::ui::{components::UiComponent, style::Theme};

/// Sample comments shown in the comments sheet, as (author, text, age)
const SAMPLE_COMMENTS: [(&str, &str, &str); 3] = [
    (
        "Amitabh Singh",
        "This is so helpful! I've been trying to reduce waste in my manufacturing unit.",
        "2 days ago",
    ),
    (
        "Priyanka Desai",
        "Can you share more details about the solar panel installation costs?",
        "1 day ago",
    ),
    (
        "Rajesh Kumar",
        "I implemented this in my business and saved ₹5000 in the first month!",
        "5 hours ago",
    ),
];

pub fn render_reels(screen: &ReelsScreen, store: &MockDataStore, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let feed = &screen.feed;
    let Some(reel) = feed.current(&store.reels) else {
        UiComponent::empty_message("No reels yet", None).render(area, buf);
        return;
    };

    let heart = if feed.is_liked(&reel.id) { "♥" } else { "♡" };
    let sound = if feed.muted { "🔇 muted" } else { "🔊 sound on" };

    let lines = vec![
        Line::from(Span::styled(reel.title.clone(), Style::default().fg(theme.text).bold())),
        Line::from(reel.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} • Business Owner", reel.author),
            Style::default().fg(theme.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} {}", heart, feed.like_count(reel)), Style::default().fg(theme.danger)),
            Span::raw("   "),
            Span::styled(format!("💬 {}", reel.comments), Style::default().fg(theme.accent)),
            Span::raw("   "),
            Span::styled(sound, Style::default().fg(theme.muted)),
        ]),
    ];

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(format!(" Reel {}/{} ", feed.index() + 1, store.reels.len()))
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.primary)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(area, buf);

    if feed.show_comments {
        let sheet = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area)[1];
        Clear.render(sheet, buf);

        let mut comment_lines = Vec::new();
        for (author, text, age) in SAMPLE_COMMENTS {
            comment_lines.push(Line::from(vec![
                Span::styled(author, Style::default().fg(theme.text).bold()),
                Span::styled(format!("  {}", age), Style::default().fg(theme.muted)),
            ]));
            comment_lines.push(Line::from(text));
        }

        Paragraph::new(comment_lines)
            .block(
                Block::bordered()
                    .title(format!(" Comments ({}) ", reel.comments))
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.accent)),
            )
            .style(theme.base())
            .wrap(Wrap { trim: true })
            .render(sheet, buf);
    }
}
