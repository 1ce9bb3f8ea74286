// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::theme_toggle;
use crate::ui::thumbnail_rail;
use crate::ui::viewport;
use iced::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Rail(thumbnail_rail::Message),
    Viewport(viewport::Message),
    ThemeToggle(theme_toggle::Message),
    /// Periodic re-read of the ambient system color scheme. Only subscribed
    /// while the user has not made an explicit theme choice.
    AmbientPoll(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional folder holding the numbered slide files.
    pub slide_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_SLIDER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
