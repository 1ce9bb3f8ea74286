// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the theme
//! switcher.
//!
//! `App` wires the two independent components into one window: the gallery
//! cursor drives the rail and viewport, the theme switcher drives the window
//! theme and color scheme. They never exchange data; composition happens only
//! here.

mod message;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::gallery::{self, Gallery};
use crate::i18n::I18n;
use crate::media::{self, LoadedSlide};
use crate::theme_switcher::{ThemeMode, ThemeSwitcher};
use crate::ui::theming::ColorScheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging UI components, localization, and the
/// persisted theme preference.
pub struct App {
    i18n: I18n,
    gallery: Gallery,
    /// Decoded slides (or placeholders), one per gallery entry.
    slides: Vec<LoadedSlide>,
    theme_switcher: ThemeSwitcher,
    /// Color scheme matching the switcher's mode, refreshed on every change.
    scheme: ColorScheme,
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("slides", &self.slides.len())
            .field("selected", &self.gallery.selected_index())
            .field("theme", &self.theme_switcher.mode())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced's boot closure must be Fn, so the flags move through a
    // RefCell<Option<_>> and are taken exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let switcher = ThemeSwitcher::new(None, ThemeMode::Dark);
        let scheme = ColorScheme::for_mode(switcher.mode());
        Self {
            i18n: I18n::default(),
            gallery: Gallery::new(Vec::new()),
            slides: Vec::new(),
            theme_switcher: switcher,
            scheme,
            config_dir: None,
        }
    }
}

impl App {
    /// Initializes application state from CLI flags and persisted config:
    /// loads the slide list synchronously and resolves the initial theme from
    /// the persisted choice or the ambient system preference.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let config = config::load(config_dir.as_deref()).unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let slide_dir = flags
            .slide_dir
            .or_else(|| config.slide_dir.clone())
            .unwrap_or_else(|| gallery::DEFAULT_SLIDE_DIR.to_string());
        let gallery = Gallery::new(gallery::default_slides(Path::new(&slide_dir)));

        let slides = gallery
            .slides()
            .iter()
            .enumerate()
            .map(|(index, path)| media::load_slide(path, index + 1))
            .collect();

        let theme_switcher = ThemeSwitcher::from_system(config.theme);
        let scheme = ColorScheme::for_mode(theme_switcher.mode());

        let app = App {
            i18n,
            gallery,
            slides,
            theme_switcher,
            scheme,
            config_dir,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.label() {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        match self.theme_switcher.mode() {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_ambient_subscription(self.theme_switcher.user_override()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            theme_switcher: &mut self.theme_switcher,
            scheme: &mut self.scheme,
            config_dir: self.config_dir.as_deref(),
        };

        match message {
            Message::Rail(rail_message) => update::handle_rail_message(&mut ctx, rail_message),
            Message::Viewport(viewport_message) => {
                update::handle_viewport_message(&mut ctx, viewport_message)
            }
            Message::ThemeToggle(toggle_message) => {
                update::handle_theme_toggle(&mut ctx, toggle_message)
            }
            Message::AmbientPoll(_) => update::handle_ambient_poll(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            scheme: &self.scheme,
            mode: self.theme_switcher.mode(),
            gallery: &self.gallery,
            slides: &self.slides,
        })
    }
}
