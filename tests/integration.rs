// SPDX-License-Identifier: MPL-2.0
use iced_slider::config::{self, Config};
use iced_slider::i18n::I18n;
use iced_slider::theme_switcher::{ThemeMode, ThemeSwitcher};
use tempfile::tempdir;

#[test]
fn test_theme_choice_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_file = dir.path().join("settings.toml");

    // First run: no persisted choice, the ambient preference applies.
    let persisted = config::load_from_path(&config_file)
        .expect("Failed to load config from path")
        .theme;
    assert_eq!(persisted, None);
    let mut switcher = ThemeSwitcher::new(persisted, ThemeMode::Light);
    assert_eq!(switcher.mode(), ThemeMode::Light);
    assert!(!switcher.user_override());

    // The user toggles; the app persists the resulting mode.
    switcher.toggle();
    let saved = Config {
        theme: Some(switcher.mode()),
        ..Config::default()
    };
    config::save_to_path(&saved, &config_file).expect("Failed to write config file");

    // Second run: the persisted choice wins over a conflicting ambient
    // preference and counts as an explicit override.
    let persisted = config::load_from_path(&config_file)
        .expect("Failed to load config from path")
        .theme;
    assert_eq!(persisted, Some(ThemeMode::Dark));
    let restarted = ThemeSwitcher::new(persisted, ThemeMode::Light);
    assert_eq!(restarted.mode(), ThemeMode::Dark);
    assert!(restarted.user_override());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_file = dir.path().join("settings.toml");

    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &config_file).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_file).expect("Failed to load config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("window-title"), "Iced Slider");

    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &config_file).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_file).expect("Failed to load config from path");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}
