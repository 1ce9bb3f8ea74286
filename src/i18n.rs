// SPDX-License-Identifier: MPL-2.0
//! Fluent-based localization.
//!
//! `.ftl` bundles are embedded at compile time from `assets/i18n/`. The active
//! locale is resolved in order: CLI override, persisted config, OS locale,
//! then `en-US`. Missing messages render as `MISSING: key` so untranslated
//! strings are visible instead of silently empty.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Localizations;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for file in Localizations::iter() {
            let Some(locale_str) = file.as_ref().strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            if let Some(content) = Localizations::get(file.as_ref()) {
                let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
                let resource =
                    FluentResource::try_new(source).expect("embedded FTL file failed to parse");
                let mut bundle = FluentBundle::new(vec![locale.clone()]);
                bundle
                    .add_resource(resource)
                    .expect("embedded FTL resource conflicts with itself");
                bundles.insert(locale, bundle);
            }
        }

        let available: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        let current_locale = resolve_locale(cli_lang, config, &available).unwrap_or_else(|| {
            FALLBACK_LOCALE
                .parse()
                .expect("fallback locale identifier is valid")
        });

        Self {
            bundles,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates a message key in the current locale.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Picks the first available locale from CLI, config, then OS locale.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = cli_lang
        .into_iter()
        .chain(config.language.clone())
        .chain(sys_locale::get_locale());

    for candidate in candidates {
        if let Ok(locale) = candidate.parse::<LanguageIdentifier>() {
            if available.contains(&locale) {
                return Some(locale);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_language_wins_over_config() {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        let locale = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(locale, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_applies_without_cli() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let locale = resolve_locale(None, &config, &available());
        assert_eq!(locale, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_language_falls_through() {
        let config = Config {
            language: Some("tlh".to_string()),
            ..Config::default()
        };
        let locale = resolve_locale(None, &config, &available());
        // Either the OS locale matched an available one, or nothing did.
        if let Some(l) = locale {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn embedded_bundles_translate_known_keys() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
        assert_eq!(i18n.tr("window-title"), "Iced Slider");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.tr("no-such-key").starts_with("MISSING:"));
    }
}
