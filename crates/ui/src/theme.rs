use ratatui::style::{Color, Modifier, Style};

pub const MAX_CONTENT_WIDTH: u16 = 80;

pub const PRIMARY: Color = Color::Indexed(63);
pub const SUCCESS: Color = Color::Indexed(34);
pub const SUCCESS_ALT: Color = Color::Indexed(86);
pub const ERROR: Color = Color::Indexed(196);
pub const INFO: Color = Color::Indexed(244);
pub const CURSOR: Color = Color::Indexed(212);
pub const PROGRESS: Color = Color::Rgb(0xff, 0x00, 0xe1);

#[must_use]
pub fn border() -> Style {
    Style::new().fg(PRIMARY)
}

#[must_use]
pub fn title() -> Style {
    Style::new().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn question() -> Style {
    Style::new().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn answer() -> Style {
    Style::new().fg(SUCCESS_ALT)
}

#[must_use]
pub fn success() -> Style {
    Style::new().fg(SUCCESS).add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn info() -> Style {
    Style::new().fg(INFO).add_modifier(Modifier::ITALIC)
}

#[must_use]
pub fn selected() -> Style {
    Style::new().fg(SUCCESS_ALT)
}

#[must_use]
pub fn unselected() -> Style {
    Style::new().fg(INFO)
}

#[must_use]
pub fn cursor() -> Style {
    Style::new().fg(CURSOR)
}

#[must_use]
pub fn checked() -> Style {
    Style::new().fg(SUCCESS)
}

#[must_use]
pub fn progress() -> Style {
    Style::new().fg(PROGRESS)
}
