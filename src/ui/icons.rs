// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for embedded SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and their handles
//! cached in `OnceLock`. SVGs use `currentColor` strokes, so callers tint them
//! per theme through [`sized`].
//!
//! Icons use generic visual names describing their appearance, not the action
//! context (e.g. `moon`, not `enable_dark_mode`).

use crate::theme_switcher::ThemeMode;
use iced::widget::svg::{self, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> svg::Handle {
            static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            HANDLE.get_or_init(|| svg::Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(sun, "sun.svg", "Sun icon: circle with rays.");
define_icon!(moon, "moon.svg", "Moon icon: crescent shape.");
define_icon!(
    chevron_left,
    "chevron_left.svg",
    "Chevron pointing left: previous-slide shape."
);
define_icon!(
    chevron_right,
    "chevron_right.svg",
    "Chevron pointing right: next-slide shape."
);
define_icon!(image, "image.svg", "Picture frame with mountain and sun.");

/// Icon shown on the theme toggle for the given mode: the moon invites dark
/// mode while light is active, the sun invites light mode while dark is.
pub fn theme_toggle_icon(mode: ThemeMode) -> svg::Handle {
    match mode {
        ThemeMode::Light => moon(),
        ThemeMode::Dark => sun(),
    }
}

/// Builds a square, tinted SVG widget from an icon handle.
pub fn sized(handle: svg::Handle, size: f32, color: iced::Color) -> Svg<'static> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme, _status| svg::Style { color: Some(color) })
}
