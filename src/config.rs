// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.
//!
//! The persisted `theme` key is the durable record of the user's explicit
//! theme choice: its absence means no choice has been made and the app keeps
//! following the ambient system preference. A config directory can be forced
//! with the `--config-dir` flag or the `ICED_SLIDER_CONFIG_DIR` environment
//! variable, which keeps tests and portable installs away from the platform
//! config dir.

use crate::error::Result;
use crate::theme_switcher::ThemeMode;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSlider";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SLIDER_CONFIG_DIR";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Explicitly chosen theme. `None` means "follow the system".
    #[serde(default)]
    pub theme: Option<ThemeMode>,
    /// Preferred locale in BCP-47 form (e.g. `fr`, `en-US`).
    #[serde(default)]
    pub language: Option<String>,
    /// Folder holding the numbered slide files. Defaults to `assets/slider`.
    #[serde(default)]
    pub slide_dir: Option<String>,
}

/// Resolves the settings file location: explicit override, then the
/// environment variable, then the platform config directory.
fn config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = dir_override {
        return Some(dir.join(CONFIG_FILE));
    }
    if let Ok(dir) = env::var(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load(dir_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path(dir_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = config_path(dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    // A damaged settings file degrades to defaults instead of failing startup.
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_theme() {
        let config = Config {
            theme: Some(ThemeMode::Dark),
            language: Some("fr".to_string()),
            slide_dir: None,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.theme, Some(ThemeMode::Dark));
        assert_eq!(loaded.language, config.language);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.theme.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn absent_theme_key_means_no_user_choice() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"en-US\"\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert!(loaded.theme.is_none());
        assert_eq!(loaded.language.as_deref(), Some("en-US"));
    }

    #[test]
    fn load_with_dir_override_reads_that_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            theme: Some(ThemeMode::Light),
            ..Config::default()
        };
        save(&config, Some(temp_dir.path())).expect("failed to save config");

        let loaded = load(Some(temp_dir.path())).expect("failed to load config");
        assert_eq!(loaded.theme, Some(ThemeMode::Light));
    }

    #[test]
    fn load_of_missing_file_yields_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = load(Some(temp_dir.path())).expect("load should not error");
        assert!(loaded.theme.is_none());
        assert!(loaded.slide_dir.is_none());
    }
}
