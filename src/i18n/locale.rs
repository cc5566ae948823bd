//! Locale type: the closed set of site languages.
//!
//! UI-selected language codes arrive from query strings and cookies in
//! whatever form the browser or menu produced. `normalize_locale` maps
//! them onto the three supported locales and never fails.

use crate::i18n::{LocaleConfig, LocaleRegistry, LocaleStrings};
use serde::Serialize;
use std::fmt;

/// A supported site locale.
///
/// Declaration order (ru, kg, en) is the order used whenever a "first
/// available" locale has to be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ru,
    Kg,
    En,
}

impl Locale {
    /// All supported locales in fallback order.
    pub const ALL: [Locale; 3] = [Locale::Ru, Locale::Kg, Locale::En];

    /// The site's primary authored language, used as the default and as the
    /// first fallback for missing translations.
    pub const PRIMARY: Locale = Locale::Ru;

    /// Strictly parse a language code, accepting registered aliases.
    ///
    /// # Returns
    /// * `Some(Locale)` for `ru`, `kg`, `ky` and `en` (case-insensitive)
    /// * `None` for anything else
    pub fn from_code(code: &str) -> Option<Locale> {
        let code = code.trim().to_ascii_lowercase();
        LocaleRegistry::get()
            .find(&code)
            .map(|config| config.locale)
    }

    /// Canonical site code (`ru`, `kg`, `en`).
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::Kg => "kg",
            Locale::En => "en",
        }
    }

    /// Value sent as the `lang` query parameter to the content API.
    pub fn api_code(&self) -> &'static str {
        self.config().api_code
    }

    /// BCP 47 tag for the `<html lang>` attribute.
    pub fn html_lang(&self) -> &'static str {
        self.config().html_lang
    }

    /// Registry entry for this locale.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get().config(*self)
    }

    /// Localized interface strings for this locale.
    pub fn strings(&self) -> &'static LocaleStrings {
        self.config().strings
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::PRIMARY
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Map a UI-selected language code onto a supported locale.
///
/// Surrounding whitespace and case are ignored and only the primary subtag
/// is considered (`en-US` → `en`). `ky` is an alias of `kg`. Unrecognized
/// input maps to [`Locale::PRIMARY`].
pub fn normalize_locale(input: &str) -> Locale {
    let primary_subtag = input
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default();

    Locale::from_code(primary_subtag).unwrap_or(Locale::PRIMARY)
}
