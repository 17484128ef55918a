#[allow(unused_imports)] /// Needed for Stylize in this scope
use ratatui::style::{Style, Stylize};
use ratatui::style::Color;

/// Colours for the light and dark variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub warning: Color,
    pub danger: Color,
}

impl Theme {
    pub fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: Color::Rgb(23, 23, 23),
                text: Color::White,
                muted: Color::Gray,
                primary: Color::LightGreen,
                accent: Color::LightCyan,
                warning: Color::Yellow,
                danger: Color::LightRed,
            }
        } else {
            Self {
                background: Color::Reset,
                text: Color::Reset,
                muted: Color::DarkGray,
                primary: Color::Green,
                accent: Color::Cyan,
                warning: Color::Yellow,
                danger: Color::Red,
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn border(&self, is_focused: bool) -> Style {
        if is_focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }
}

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim() }
}
