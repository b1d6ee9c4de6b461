//! Theme preference and the palettes derived from it

use ratatui::style::Color;

/// Key under which the theme preference is persisted
pub const THEME_KEY: &str = "theme";

/// Light/dark page theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// The opposite theme
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Persisted string encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Decode a persisted value. Anything unrecognised yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    /// Label shown on the theme toggle
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "☀ light",
            ThemePreference::Dark => "☾ dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ThemePreference::Dark => Palette {
                bg: Color::Rgb(2, 6, 23),
                fg: Color::Rgb(226, 232, 240),
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::Magenta,
                success: Color::Green,
                warning: Color::Yellow,
                border: Color::Rgb(51, 65, 85),
                blob: Color::Rgb(76, 29, 149),
            },
            ThemePreference::Light => Palette {
                bg: Color::Rgb(248, 250, 252),
                fg: Color::Rgb(15, 23, 42),
                muted: Color::Gray,
                accent: Color::Blue,
                highlight: Color::Rgb(190, 24, 93),
                success: Color::Rgb(21, 128, 61),
                warning: Color::Rgb(180, 83, 9),
                border: Color::Rgb(203, 213, 225),
                blob: Color::Rgb(196, 181, 253),
            },
        }
    }
}

/// Colors every component draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
    pub blob: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
    }

    #[test]
    fn test_parse_only_accepts_known_values() {
        assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("Light"), None);
        assert_eq!(ThemePreference::parse(""), None);
    }

    #[test]
    fn test_toggle_flips() {
        let theme = ThemePreference::Dark;
        assert_eq!(theme.toggled(), ThemePreference::Light);
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(
            ThemePreference::Dark.palette().bg,
            ThemePreference::Light.palette().bg
        );
    }
}
