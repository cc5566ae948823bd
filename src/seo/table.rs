//! Centralized `(PageKey, Locale)` metadata table.

use crate::i18n::Locale;
use crate::routes::PageKey;
use crate::seo::builtin::{BuiltinPage, Entry, BUILTIN_PAGES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Localized head fields of one page in one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
}

impl SeoEntry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            keywords: keywords.into(),
        }
    }
}

impl From<Entry> for SeoEntry {
    fn from((title, description, keywords): Entry) -> Self {
        SeoEntry::new(title, description, keywords)
    }
}

/// Outcome of a metadata lookup after all fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMetadata {
    /// Page whose metadata was used (`home` when the requested key is unknown)
    pub page_key: PageKey,
    /// Locale that was asked for
    pub locale: Locale,
    /// Locale the text actually came from; `None` when nothing was found
    pub source_locale: Option<Locale>,
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl ResolvedMetadata {
    /// Whether a fallback page or locale had to be used.
    pub fn is_fallback(&self, requested: &PageKey) -> bool {
        self.page_key != *requested || self.source_locale != Some(self.locale)
    }
}

#[derive(Debug, Error)]
pub enum MetadataLoadError {
    #[error("Failed to parse SEO metadata JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown locale '{locale}' for page '{page_key}' in SEO metadata")]
    UnknownLocale { page_key: String, locale: String },
}

#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    pages: BTreeMap<PageKey, BTreeMap<Locale, SeoEntry>>,
}

impl MetadataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the site's built-in metadata.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for page in BUILTIN_PAGES {
            let BuiltinPage { key, ru, kg, en } = *page;
            let page_key = PageKey::from_static(key);
            table.insert(page_key.clone(), Locale::Ru, ru.into());
            table.insert(page_key.clone(), Locale::Kg, kg.into());
            table.insert(page_key, Locale::En, en.into());
        }
        table
    }

    /// Insert or replace one entry, returning the previous one.
    pub fn insert(&mut self, page_key: PageKey, locale: Locale, entry: SeoEntry) -> Option<SeoEntry> {
        self.pages.entry(page_key).or_default().insert(locale, entry)
    }

    pub fn get(&self, page_key: &PageKey, locale: Locale) -> Option<&SeoEntry> {
        self.pages.get(page_key).and_then(|locales| locales.get(&locale))
    }

    pub fn contains(&self, page_key: &PageKey) -> bool {
        self.pages.contains_key(page_key)
    }

    /// Locales with an entry for `page_key`, in fallback order.
    pub fn locales(&self, page_key: &PageKey) -> Vec<Locale> {
        self.pages
            .get(page_key)
            .map(|locales| locales.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn page_keys(&self) -> impl Iterator<Item = &PageKey> {
        self.pages.keys()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Overlay entries from a JSON document onto this table.
    ///
    /// Shape: `{ "<page_key>": { "<locale>": { "title", "description", "keywords" } } }`.
    /// Locale keys accept aliases such as `ky`. Returns the number of entries
    /// merged. Nothing is merged when the document is invalid.
    pub fn merge_json(&mut self, json: &str) -> Result<usize, MetadataLoadError> {
        let raw: BTreeMap<String, BTreeMap<String, SeoEntry>> = serde_json::from_str(json)?;

        let mut parsed = Vec::new();
        for (page_key, locales) in raw {
            for (code, entry) in locales {
                let locale = Locale::from_code(&code).ok_or_else(|| {
                    MetadataLoadError::UnknownLocale {
                        page_key: page_key.clone(),
                        locale: code.clone(),
                    }
                })?;
                parsed.push((PageKey::new(page_key.clone()), locale, entry));
            }
        }

        let count = parsed.len();
        for (page_key, locale, entry) in parsed {
            self.insert(page_key, locale, entry);
        }
        Ok(count)
    }

    /// Look up metadata with fallbacks.
    ///
    /// An unknown page key is replaced by `home`. Within a page the locale
    /// falls back requested → ru → first available; if nothing is found all
    /// fields are empty.
    pub fn resolve(&self, page_key: &PageKey, locale: Locale) -> ResolvedMetadata {
        let effective_key = if self.contains(page_key) {
            page_key.clone()
        } else {
            PageKey::HOME
        };

        let found = self.pages.get(&effective_key).and_then(|locales| {
            locales
                .get(&locale)
                .map(|entry| (locale, entry))
                .or_else(|| {
                    locales
                        .get(&Locale::PRIMARY)
                        .map(|entry| (Locale::PRIMARY, entry))
                })
                .or_else(|| locales.iter().next().map(|(l, entry)| (*l, entry)))
        });

        match found {
            Some((source, entry)) => ResolvedMetadata {
                page_key: effective_key,
                locale,
                source_locale: Some(source),
                title: entry.title.clone(),
                description: entry.description.clone(),
                keywords: entry.keywords.clone(),
            },
            None => ResolvedMetadata {
                page_key: effective_key,
                locale,
                source_locale: None,
                title: String::new(),
                description: String::new(),
                keywords: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &'static str) -> PageKey {
        PageKey::from_static(k)
    }

    // ==================== Builtin Tests ====================

    #[test]
    fn test_builtin_has_every_locale_for_every_page() {
        let table = MetadataTable::builtin();
        assert!(!table.is_empty());
        for page_key in table.page_keys() {
            assert_eq!(
                table.locales(page_key),
                Locale::ALL.to_vec(),
                "page {}",
                page_key
            );
        }
    }

    #[test]
    fn test_builtin_about_academy_english_title() {
        let table = MetadataTable::builtin();
        let entry = table.get(&key("academy_about"), Locale::En).unwrap();
        assert_eq!(entry.title, "About Academy");
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_exact() {
        let table = MetadataTable::builtin();
        let resolved = table.resolve(&key("contacts"), Locale::Kg);

        assert_eq!(resolved.page_key, key("contacts"));
        assert_eq!(resolved.source_locale, Some(Locale::Kg));
        assert_eq!(resolved.title, "Байланыш");
        assert!(!resolved.is_fallback(&key("contacts")));
    }

    #[test]
    fn test_resolve_unknown_page_equals_home() {
        let table = MetadataTable::builtin();
        for locale in Locale::ALL {
            let unknown = table.resolve(&key("no_such_page"), locale);
            let home = table.resolve(&PageKey::HOME, locale);
            assert_eq!(unknown, home);
            assert!(unknown.is_fallback(&key("no_such_page")));
        }
    }

    #[test]
    fn test_resolve_missing_locale_falls_back_to_ru() {
        let mut table = MetadataTable::new();
        table.insert(key("p"), Locale::Ru, SeoEntry::new("Ру", "описание", ""));
        table.insert(key("p"), Locale::En, SeoEntry::new("En", "description", ""));

        let resolved = table.resolve(&key("p"), Locale::Kg);
        assert_eq!(resolved.source_locale, Some(Locale::Ru));
        assert_eq!(resolved.title, "Ру");
        assert_eq!(resolved.locale, Locale::Kg);
    }

    #[test]
    fn test_resolve_missing_ru_falls_back_to_first_available() {
        let mut table = MetadataTable::new();
        table.insert(key("p"), Locale::En, SeoEntry::new("En", "", ""));
        table.insert(key("p"), Locale::Kg, SeoEntry::new("Кг", "", ""));

        let resolved = table.resolve(&key("p"), Locale::Ru);
        assert_eq!(resolved.source_locale, Some(Locale::Kg));
        assert_eq!(resolved.title, "Кг");
    }

    #[test]
    fn test_resolve_empty_table_yields_empty_strings() {
        let table = MetadataTable::new();
        let resolved = table.resolve(&key("anything"), Locale::En);

        assert_eq!(resolved.page_key, PageKey::HOME);
        assert!(resolved.source_locale.is_none());
        assert!(resolved.title.is_empty());
        assert!(resolved.description.is_empty());
        assert!(resolved.keywords.is_empty());
    }

    // ==================== merge_json Tests ====================

    #[test]
    fn test_merge_json_overrides_and_adds() {
        let mut table = MetadataTable::builtin();
        let json = r#"{
            "home": { "en": { "title": "Welcome", "description": "d" } },
            "open_day": { "ky": { "title": "Ачык эшиктер күнү" } }
        }"#;

        let merged = table.merge_json(json).expect("Should merge");
        assert_eq!(merged, 2);
        assert_eq!(table.get(&PageKey::HOME, Locale::En).unwrap().title, "Welcome");
        assert_eq!(table.get(&PageKey::HOME, Locale::En).unwrap().keywords, "");
        assert_eq!(
            table.get(&key("open_day"), Locale::Kg).unwrap().title,
            "Ачык эшиктер күнү"
        );
    }

    #[test]
    fn test_merge_json_unknown_locale_rejected_atomically() {
        let mut table = MetadataTable::new();
        let json = r#"{
            "a": { "ru": { "title": "A" } },
            "b": { "fr": { "title": "B" } }
        }"#;

        let err = table.merge_json(json).unwrap_err();
        assert!(matches!(err, MetadataLoadError::UnknownLocale { .. }));
        assert!(err.to_string().contains("fr"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_merge_json_invalid_document() {
        let mut table = MetadataTable::new();
        let err = table.merge_json("[1, 2]").unwrap_err();
        assert!(matches!(err, MetadataLoadError::Json(_)));
    }

    #[test]
    fn test_merge_json_missing_title_rejected() {
        let mut table = MetadataTable::new();
        let result = table.merge_json(r#"{"a": {"ru": {"description": "x"}}}"#);
        assert!(result.is_err());
    }
}
