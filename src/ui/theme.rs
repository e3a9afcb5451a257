use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(18, 20, 28);
    pub const BG_SURFACE: Color = Color::Rgb(28, 31, 43);
    pub const BORDER_DIM: Color = Color::Rgb(70, 74, 92);
    pub const TEXT_PRIMARY: Color = Color::Rgb(224, 226, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 164, 182);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 109, 128);
    pub const ACCENT_BLUE: Color = Color::Rgb(88, 140, 235);
    pub const ACCENT_TEAL: Color = Color::Rgb(86, 200, 190);
    pub const ACCENT_AMBER: Color = Color::Rgb(240, 185, 90);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 205, 120);
    pub const ACCENT_RED: Color = Color::Rgb(235, 100, 100);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn description() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ACCENT_RED).add_modifier(Modifier::BOLD)
    }

    pub fn checked() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn cursor() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BORDER_DIM)
    }

    pub fn button_primary() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn json() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BORDER_DIM)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }
}
