// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme switching with system-preference fallback.
//!
//! The [`ThemeSwitcher`] owns the binary theme mode and a flag recording
//! whether the user has made an explicit choice. Until that flag is set, the
//! switcher follows the operating system's ambient color scheme; afterwards
//! ambient changes are ignored for the rest of the session. Interested parties
//! register callbacks that are invoked synchronously on every mode change.
//!
//! The switcher itself performs no I/O. Persistence of the chosen mode lives
//! in the app layer (see `app::persistence`), which keeps this type trivial to
//! construct in tests with any combination of persisted and ambient state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary theme mode applied to the whole window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// Reads the ambient system color scheme.
///
/// Defaults to dark when detection is unavailable or reports no preference.
#[must_use]
pub fn detect_ambient() -> ThemeMode {
    if let Ok(dark_light::Mode::Light) = dark_light::detect() {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    }
}

/// Callback invoked with the new mode on every change.
pub type Subscriber = Box<dyn Fn(ThemeMode)>;

/// Theme state: current mode, whether the user chose it explicitly, and the
/// registered change subscribers.
pub struct ThemeSwitcher {
    mode: ThemeMode,
    user_override: bool,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for ThemeSwitcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeSwitcher")
            .field("mode", &self.mode)
            .field("user_override", &self.user_override)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ThemeSwitcher {
    /// Builds the switcher from an optionally persisted mode and the ambient
    /// system preference.
    ///
    /// A persisted mode counts as an explicit user choice; its absence means
    /// the switcher tracks the ambient preference until the user intervenes.
    #[must_use]
    pub fn new(persisted: Option<ThemeMode>, ambient: ThemeMode) -> Self {
        let (mode, user_override) = match persisted {
            Some(mode) => (mode, true),
            None => (ambient, false),
        };

        Self {
            mode,
            user_override,
            subscribers: Vec::new(),
        }
    }

    /// Convenience constructor that reads the ambient preference from the OS.
    #[must_use]
    pub fn from_system(persisted: Option<ThemeMode>) -> Self {
        Self::new(persisted, detect_ambient())
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Whether the user has explicitly chosen a mode this session (or a
    /// previous session persisted one).
    #[must_use]
    pub fn user_override(&self) -> bool {
        self.user_override
    }

    /// Sets the mode as an explicit user choice and notifies subscribers.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.user_override = true;
        self.notify();
    }

    /// Switches to the opposite mode as an explicit user choice.
    pub fn toggle(&mut self) {
        self.set_theme(self.mode.opposite());
    }

    /// Adopts a changed ambient preference while no explicit choice exists.
    ///
    /// Subscribers are notified only when the mode actually changes. Once
    /// `user_override` is set this is a no-op.
    pub fn sync_ambient(&mut self, ambient: ThemeMode) {
        if self.user_override || ambient == self.mode {
            return;
        }
        self.mode = ambient;
        self.notify();
    }

    /// Registers a callback invoked synchronously with the new mode on every
    /// change (explicit or ambient).
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(self.mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn persisted_mode_wins_over_ambient() {
        let switcher = ThemeSwitcher::new(Some(ThemeMode::Dark), ThemeMode::Light);
        assert_eq!(switcher.mode(), ThemeMode::Dark);
        assert!(switcher.user_override());
    }

    #[test]
    fn without_persisted_mode_ambient_applies() {
        let switcher = ThemeSwitcher::new(None, ThemeMode::Dark);
        assert_eq!(switcher.mode(), ThemeMode::Dark);
        assert!(!switcher.user_override());
    }

    #[test]
    fn toggle_twice_restores_mode() {
        let mut switcher = ThemeSwitcher::new(None, ThemeMode::Light);
        switcher.toggle();
        assert_eq!(switcher.mode(), ThemeMode::Dark);
        switcher.toggle();
        assert_eq!(switcher.mode(), ThemeMode::Light);
    }

    #[test]
    fn explicit_choice_blocks_later_ambient_changes() {
        let mut switcher = ThemeSwitcher::new(None, ThemeMode::Dark);
        switcher.set_theme(ThemeMode::Light);
        assert!(switcher.user_override());

        switcher.sync_ambient(ThemeMode::Dark);
        assert_eq!(switcher.mode(), ThemeMode::Light);
    }

    #[test]
    fn ambient_change_applies_while_no_override() {
        let mut switcher = ThemeSwitcher::new(None, ThemeMode::Light);
        switcher.sync_ambient(ThemeMode::Dark);
        assert_eq!(switcher.mode(), ThemeMode::Dark);
        assert!(!switcher.user_override());
    }

    #[test]
    fn subscribers_see_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut switcher = ThemeSwitcher::new(None, ThemeMode::Light);
        switcher.subscribe(Box::new(move |mode| sink.borrow_mut().push(mode)));

        switcher.set_theme(ThemeMode::Dark);
        switcher.toggle();
        switcher.sync_ambient(ThemeMode::Dark); // override set, ignored

        assert_eq!(*seen.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn unchanged_ambient_does_not_notify() {
        let count = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&count);

        let mut switcher = ThemeSwitcher::new(None, ThemeMode::Dark);
        switcher.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));

        switcher.sync_ambient(ThemeMode::Dark);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn opposite_is_an_involution() {
        assert_eq!(ThemeMode::Light.opposite(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.opposite().opposite(), ThemeMode::Dark);
    }

    #[test]
    fn serializes_to_lowercase_names() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            theme: ThemeMode,
        }

        let toml = toml::to_string(&Wrapper {
            theme: ThemeMode::Dark,
        })
        .expect("serialization failed");
        assert!(toml.contains("\"dark\""));
    }
}
