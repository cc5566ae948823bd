//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of the site's locales. It uses a
//! singleton pattern with `OnceLock` to ensure thread-safe initialization and
//! access.

use crate::i18n::strings::{ENGLISH_STRINGS, KYRGYZ_STRINGS, RUSSIAN_STRINGS};
use crate::i18n::{Locale, LocaleStrings};
use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    pub locale: Locale,

    /// Canonical site code (e.g., "ru", "kg", "en")
    pub code: &'static str,

    /// Alternative codes accepted from the UI (e.g., "ky" for Kyrgyz)
    pub aliases: &'static [&'static str],

    /// Value of the content API's `lang` query parameter
    pub api_code: &'static str,

    /// BCP 47 tag used for `<html lang>`
    pub html_lang: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language (e.g., "Русский", "Кыргызча")
    pub native_name: &'static str,

    /// Whether this is the primary authored language (only one should be true)
    pub is_primary: bool,

    /// Localized interface strings
    pub strings: &'static LocaleStrings,
}

impl LocaleConfig {
    /// Check whether `code` names this locale, either canonically or by alias.
    pub fn matches(&self, code: &str) -> bool {
        self.code == code || self.aliases.contains(&code)
    }
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Find a locale configuration by canonical code or alias.
    ///
    /// The code is compared as given; callers lower-case it first.
    pub fn find(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|config| config.matches(code))
    }

    /// Get the configuration of a locale.
    ///
    /// Every `Locale` variant has an entry; a missing one falls back to the
    /// primary locale's entry.
    pub fn config(&self, locale: Locale) -> &LocaleConfig {
        self.locales
            .iter()
            .find(|config| config.locale == locale)
            .unwrap_or_else(|| self.primary())
    }

    /// Get all locale configurations in fallback order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the primary locale configuration.
    pub fn primary(&self) -> &LocaleConfig {
        self.locales
            .iter()
            .find(|config| config.is_primary)
            .unwrap_or(&self.locales[0])
    }
}

/// Default locale configurations: Russian (primary), Kyrgyz and English.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::Ru,
            code: "ru",
            aliases: &[],
            api_code: "ru",
            html_lang: "ru",
            name: "Russian",
            native_name: "Русский",
            is_primary: true,
            strings: &RUSSIAN_STRINGS,
        },
        LocaleConfig {
            locale: Locale::Kg,
            code: "kg",
            aliases: &["ky"],
            api_code: "kg",
            html_lang: "ky",
            name: "Kyrgyz",
            native_name: "Кыргызча",
            is_primary: false,
            strings: &KYRGYZ_STRINGS,
        },
        LocaleConfig {
            locale: Locale::En,
            code: "en",
            aliases: &[],
            api_code: "en",
            html_lang: "en",
            name: "English",
            native_name: "English",
            is_primary: false,
            strings: &ENGLISH_STRINGS,
        },
    ]
}
