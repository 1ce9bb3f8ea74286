// SPDX-License-Identifier: MPL-2.0
//! Theme toggle button.
//!
//! A single instance lives in the top bar; it shows the symbol of the mode a
//! press would switch to (moon while light, sun while dark) with a matching
//! tooltip.

use crate::i18n::I18n;
use crate::theme_switcher::ThemeMode;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, tooltip};
use iced::Element;

/// Messages emitted by the toggle.
#[derive(Debug, Clone)]
pub enum Message {
    Pressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ToggleRequested,
}

/// Process a toggle message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Pressed => Event::ToggleRequested,
    }
}

/// Contextual data needed to render the toggle.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub mode: ThemeMode,
    pub scheme: &'a ColorScheme,
}

/// Render the toggle button with its mode-dependent icon and tooltip.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let icon = icons::sized(
        icons::theme_toggle_icon(ctx.mode),
        sizing::ICON_MD,
        ctx.scheme.text_primary,
    );

    let tooltip_key = match ctx.mode {
        ThemeMode::Light => "theme-toggle-to-dark",
        ThemeMode::Dark => "theme-toggle-to-light",
    };

    tooltip::Tooltip::new(
        button(icon)
            .padding(spacing::XS)
            .style(styles::icon_button(ctx.scheme))
            .on_press(Message::Pressed),
        text(ctx.i18n.tr(tooltip_key)).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS)
    .into()
}
