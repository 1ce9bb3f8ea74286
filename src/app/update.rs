// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Each handler mutates the relevant state through `UpdateContext` and
//! returns a `Task`. All handlers are synchronous; the only task ever
//! produced is `Task::none()`.

use super::{persistence, Message};
use crate::gallery::Gallery;
use crate::theme_switcher::{self, ThemeSwitcher};
use crate::ui::theme_toggle;
use crate::ui::theming::ColorScheme;
use crate::ui::thumbnail_rail;
use crate::ui::viewport;
use iced::Task;
use std::path::Path;

/// Mutable state slices handed to the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut Gallery,
    pub theme_switcher: &'a mut ThemeSwitcher,
    pub scheme: &'a mut ColorScheme,
    pub config_dir: Option<&'a Path>,
}

pub fn handle_rail_message(
    ctx: &mut UpdateContext<'_>,
    message: thumbnail_rail::Message,
) -> Task<Message> {
    match thumbnail_rail::update(message) {
        thumbnail_rail::Event::Select(index) => ctx.gallery.select(index),
    }
    Task::none()
}

pub fn handle_viewport_message(
    ctx: &mut UpdateContext<'_>,
    message: viewport::Message,
) -> Task<Message> {
    match viewport::update(message) {
        viewport::Event::Previous => ctx.gallery.previous(),
        viewport::Event::Next => ctx.gallery.next(),
    }
    Task::none()
}

/// Toggles the theme as an explicit user choice and persists it.
pub fn handle_theme_toggle(
    ctx: &mut UpdateContext<'_>,
    message: theme_toggle::Message,
) -> Task<Message> {
    match theme_toggle::update(message) {
        theme_toggle::Event::ToggleRequested => {
            ctx.theme_switcher.toggle();
            *ctx.scheme = ColorScheme::for_mode(ctx.theme_switcher.mode());
            persistence::persist_theme(ctx.theme_switcher.mode(), ctx.config_dir)
        }
    }
}

/// Re-reads the ambient preference; a change is adopted only while the theme
/// still follows the system.
pub fn handle_ambient_poll(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.theme_switcher
        .sync_ambient(theme_switcher::detect_ambient());
    *ctx.scheme = ColorScheme::for_mode(ctx.theme_switcher.mode());
    Task::none()
}
