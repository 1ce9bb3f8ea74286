// SPDX-License-Identifier: MPL-2.0
//! Shared button and container styles built from the active color scheme.
//!
//! Styles are returned as closures because the scheme is chosen per frame
//! from the theme mode, not from Iced's built-in theme palette.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Round navigation-arrow button floating over the main image.
pub fn nav_button(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let accent = scheme.accent;
    let surface = scheme.surface_secondary;
    move |_theme: &Theme, status: button::Status| {
        let (background_alpha, border_color) = match status {
            button::Status::Hovered | button::Status::Pressed => (opacity::OPAQUE, accent),
            _ => (opacity::OVERLAY_STRONG, Color::TRANSPARENT),
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: background_alpha,
                ..surface
            })),
            text_color: accent,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Thumbnail button: accent ring on the selected entry, muted ring otherwise.
pub fn thumbnail(
    scheme: &ColorScheme,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let ring = if selected {
        scheme.accent
    } else {
        scheme.ring_muted
    };
    let hover_ring = if selected {
        scheme.accent_strong
    } else {
        scheme.text_secondary
    };
    move |_theme: &Theme, status: button::Status| {
        let ring_color = match status {
            button::Status::Hovered => hover_ring,
            _ => ring,
        };
        let ring_width = if selected {
            border::WIDTH_MD
        } else {
            border::WIDTH_SM
        };

        button::Style {
            background: None,
            text_color: ring_color,
            border: Border {
                color: ring_color,
                width: ring_width,
                radius: radius::FULL.into(),
            },
            shadow: if selected { shadow::SM } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Plain icon button used by the theme toggle.
pub fn icon_button(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface = scheme.surface_tertiary;
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(surface)),
            _ => None,
        };

        button::Style {
            background,
            text_color: Color::TRANSPARENT,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Flat surface container (rail, top bar).
pub fn surface(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Info panel overlaying the bottom-left of the main image.
pub fn info_overlay(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface_secondary;
    let ring = scheme.ring_muted;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..surface
        })),
        border: Border {
            color: ring,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Dashed-feel frame around the empty state.
pub fn empty_frame(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let ring = scheme.ring_muted;
    move |_theme: &Theme| container::Style {
        border: Border {
            color: ring,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
