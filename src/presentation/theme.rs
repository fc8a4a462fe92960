use crate::application::ThemeMode;
use ratatui::style::Color;

/// Brand colors for one theme mode.
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub error: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(78, 49, 170),
            secondary: Color::Rgb(55, 149, 189),
            background: Color::Rgb(246, 248, 250),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(36, 41, 46),
            text_secondary: Color::Rgb(88, 96, 105),
            error: Color::Rgb(211, 47, 47),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(78, 49, 170),
            secondary: Color::Rgb(55, 149, 189),
            background: Color::Rgb(18, 18, 18),
            surface: Color::Rgb(29, 29, 29),
            text: Color::Rgb(255, 255, 255),
            text_secondary: Color::Rgb(158, 158, 158),
            error: Color::Rgb(244, 67, 54),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_matching_palette() {
        assert_eq!(
            Palette::for_mode(ThemeMode::Light).background,
            Color::Rgb(246, 248, 250)
        );
        assert_eq!(
            Palette::for_mode(ThemeMode::Dark).background,
            Color::Rgb(18, 18, 18)
        );
        // The brand purple is shared by both modes.
        assert_eq!(
            Palette::for_mode(ThemeMode::Light).primary,
            Palette::for_mode(ThemeMode::Dark).primary
        );
    }
}
