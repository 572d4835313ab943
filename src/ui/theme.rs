//! Theme configuration

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Dark palette shared by every widget
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const SURFACE_HIGHLIGHT: Color = Color::from_rgb(0.18, 0.18, 0.22);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
    pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.4, 0.45);
    pub const ERROR: Color = Color::from_rgb(0.45, 0.15, 0.17);
    pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.7);
}

pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::SURFACE)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn window(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::BACKGROUND)),
        ..Default::default()
    }
}

/// Rounded pill used for suggestion chips and small actions
pub fn chip(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => DarkTheme::SURFACE_HIGHLIGHT,
        _ => DarkTheme::SURFACE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: DarkTheme::TEXT,
        border: Border {
            color: DarkTheme::PRIMARY,
            width: 1.0,
            radius: 14.0.into(),
        },
        ..Default::default()
    }
}

/// Borderless button around a thumbnail
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered => DarkTheme::PRIMARY,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(DarkTheme::SURFACE)),
        text_color: DarkTheme::TEXT_MUTED,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
