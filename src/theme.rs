//! Light and dark colour schemes. The active one flips every time food is eaten.

use iced::{Color, Theme};

#[derive(Clone, Debug)]
pub enum ThemeMessage {
    Toggle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn to_iced(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette::LIGHT,
            ThemeMode::Dark => Palette::DARK,
        }
    }
}

impl From<&Theme> for ThemeMode {
    fn from(theme: &Theme) -> Self {
        match theme {
            Theme::Dark => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

/// Colours used to draw the game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub board: Color,
    pub grid_line: Color,
    pub snake_body: Color,
    pub snake_head: Color,
    pub food: Color,
    pub text: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::from_rgb(0.96, 0.96, 0.96),
        board: Color::from_rgb(0.91, 0.96, 0.91),
        grid_line: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        snake_body: Color::from_rgb(0.18, 0.49, 0.2),
        snake_head: Color::from_rgb(0.11, 0.37, 0.13),
        food: Color::from_rgb(0.91, 0.3, 0.24),
        text: Color::from_rgb(0.13, 0.13, 0.13),
    };

    pub const DARK: Palette = Palette {
        background: Color::from_rgb(0.07, 0.07, 0.07),
        board: Color::from_rgb(0.12, 0.12, 0.12),
        grid_line: Color::from_rgba(1.0, 1.0, 1.0, 0.06),
        snake_body: Color::from_rgb(0.18, 0.8, 0.44),
        snake_head: Color::from_rgb(0.55, 0.95, 0.66),
        food: Color::from_rgb(0.91, 0.3, 0.24),
        text: Color::from_rgb(0.93, 0.93, 0.93),
    };

    #[must_use]
    pub fn for_theme(theme: &Theme) -> Palette {
        ThemeMode::from(theme).palette()
    }
}
