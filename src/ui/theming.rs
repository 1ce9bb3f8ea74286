// SPDX-License-Identifier: MPL-2.0
//! Color schemes for the two theme modes.

use crate::theme_switcher::ThemeMode;
use crate::ui::design_tokens::palette;
use iced::Color;

/// Color palette for a theme mode.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub accent: Color,
    pub accent_strong: Color,

    // Thumbnail ring on unselected entries
    pub ring_muted: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::GRAY_100,
            surface_secondary: palette::WHITE,
            surface_tertiary: palette::GRAY_300,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_500,

            accent: palette::ACCENT_500,
            accent_strong: palette::ACCENT_600,

            ring_muted: palette::GRAY_300,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            surface_tertiary: palette::GRAY_700,

            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_500,

            accent: palette::ACCENT_400,
            accent_strong: palette::ACCENT_500,

            ring_muted: palette::GRAY_700,
        }
    }

    /// Scheme matching the given theme mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}
