// SPDX-License-Identifier: MPL-2.0
//! Theme persistence.
//!
//! Writes the explicitly chosen mode under the `theme` key of `settings.toml`.
//! A write failure is reported to stderr and otherwise ignored; the session
//! keeps the in-memory mode.

use super::Message;
use crate::config;
use crate::theme_switcher::ThemeMode;
use iced::Task;
use std::path::Path;

/// Persists the user's explicit theme choice.
///
/// Guarded during tests to keep isolation: unit tests exercise the config
/// round trip through `config::save_to_path` directly.
pub fn persist_theme(mode: ThemeMode, config_dir: Option<&Path>) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let mut cfg = config::load(config_dir).unwrap_or_default();
    cfg.theme = Some(mode);

    if let Err(error) = config::save(&cfg, config_dir) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}
