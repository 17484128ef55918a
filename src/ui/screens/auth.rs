use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::modules::screens::{AuthField, AuthForm, AuthMode};
use crate::modules::session::AppState;
use crate::ui::{centered_rect, style::Theme};

pub fn render_auth(form: &AuthForm, state: &AppState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let card = centered_rect(60, 90, area);
    let title = match form.mode {
        AuthMode::Login => " Login ",
        AuthMode::SignUp => " Sign Up ",
    };
    let block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(card);
    block.render(card, buf);

    let fields = form.fields();
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(2)); // Error / loading
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    Paragraph::new("Sustainability with svalpa jugaad")
        .fg(theme.muted)
        .italic()
        .alignment(Alignment::Center)
        .render(rows[0], buf);

    for (i, field) in fields.iter().enumerate() {
        let (label, value) = match field {
            AuthField::Email => ("Email", form.email.clone()),
            AuthField::Phone => ("Phone", form.phone.clone()),
            AuthField::Password => ("Password", form.masked_password()),
        };
        let is_focused = form.focus == *field;

        Paragraph::new(value)
            .block(
                Block::bordered()
                    .title(format!(" {} ", label))
                    .border_type(BorderType::Rounded)
                    .border_style(theme.border(is_focused)),
            )
            .render(rows[i + 1], buf);
    }

    let status_row = rows[fields.len() + 1];
    if state.is_loading {
        Paragraph::new("Signing in...")
            .fg(theme.accent)
            .alignment(Alignment::Center)
            .render(status_row, buf);
    } else if let Some(error) = &form.error {
        Paragraph::new(error.as_str())
            .fg(theme.danger)
            .alignment(Alignment::Center)
            .render(status_row, buf);
    }

    let switch = match form.mode {
        AuthMode::Login => "Don't have an account? Ctrl+N to sign up",
        AuthMode::SignUp => "Already have an account? Ctrl+N to log in",
    };
    Paragraph::new(format!("{}\nCtrl+G: Continue as Guest", switch))
        .fg(theme.muted)
        .alignment(Alignment::Center)
        .render(rows[fields.len() + 2], buf);
}
