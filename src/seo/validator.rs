//! SEO metadata completeness validation.
//!
//! A page without metadata in some locale does not break rendering (the
//! lookup falls back), but it is a configuration defect. This module finds
//! such defects so they can be reported at startup and by `seo-audit`.

use crate::i18n::Locale;
use crate::routes::{PageKey, RouteTable};
use crate::seo::MetadataTable;
use std::collections::{BTreeSet, HashMap};

/// Validation report containing errors and warnings about the metadata table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects that make some page fall back to other text
    pub errors: Vec<String>,

    /// Non-critical issues such as empty keywords
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the metadata table against the route table.
pub struct MetadataValidator;

impl MetadataValidator {
    /// Validate that every routed page has complete metadata.
    ///
    /// Errors:
    /// - `home` has no metadata
    /// - a routed page has no metadata at all
    /// - a page lacks an entry for some supported locale
    /// - an entry has an empty title
    ///
    /// Warnings:
    /// - empty description or keywords
    /// - the same title used by two pages in one locale
    /// - metadata for a page no route leads to
    pub fn validate(table: &MetadataTable, routes: &RouteTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        if !table.contains(&PageKey::HOME) {
            report
                .errors
                .push("Default page 'home' has no metadata".to_string());
        }

        let mut routed: BTreeSet<&PageKey> = BTreeSet::new();
        for (pattern, page_key) in routes.routes() {
            routed.insert(page_key);
            if !table.contains(page_key) {
                report.errors.push(format!(
                    "Route '{}' leads to page '{}' which has no metadata",
                    pattern, page_key
                ));
            }
        }

        let mut titles: HashMap<(Locale, &str), &PageKey> = HashMap::new();

        for page_key in table.page_keys() {
            if !routed.contains(page_key) && !page_key.is_home() {
                report.warnings.push(format!(
                    "Page '{}' has metadata but no route leads to it",
                    page_key
                ));
            }

            for locale in Locale::ALL {
                let Some(entry) = table.get(page_key, locale) else {
                    report.errors.push(format!(
                        "Page '{}' is missing '{}' metadata",
                        page_key, locale
                    ));
                    continue;
                };

                if entry.title.trim().is_empty() {
                    report.errors.push(format!(
                        "Page '{}' has an empty '{}' title",
                        page_key, locale
                    ));
                } else if let Some(other) = titles.insert((locale, entry.title.as_str()), page_key) {
                    report.warnings.push(format!(
                        "Pages '{}' and '{}' share the '{}' title \"{}\"",
                        other, page_key, locale, entry.title
                    ));
                }

                if entry.description.trim().is_empty() {
                    report.warnings.push(format!(
                        "Page '{}' has an empty '{}' description",
                        page_key, locale
                    ));
                }
                if entry.keywords.trim().is_empty() {
                    report.warnings.push(format!(
                        "Page '{}' has empty '{}' keywords",
                        page_key, locale
                    ));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::SeoEntry;

    fn complete_entry(title: &str) -> SeoEntry {
        SeoEntry::new(title, "description", "keywords")
    }

    fn table_with_home() -> MetadataTable {
        let mut table = MetadataTable::new();
        for locale in Locale::ALL {
            table.insert(PageKey::HOME, locale, complete_entry(&format!("Home {}", locale)));
        }
        table
    }

    fn routes_with_home() -> RouteTable {
        let mut routes = RouteTable::new();
        routes.insert("/", PageKey::HOME).unwrap();
        routes
    }

    // ==================== Builtin Tests ====================

    #[test]
    fn test_builtin_table_is_clean() {
        let report = MetadataValidator::validate(&MetadataTable::builtin(), RouteTable::builtin());
        assert!(report.is_clean(), "{:?}", report);
    }

    // ==================== Error Tests ====================

    #[test]
    fn test_missing_home_is_error() {
        let report = MetadataValidator::validate(&MetadataTable::new(), &RouteTable::new());
        assert!(report.has_errors());
        assert!(report.errors[0].contains("home"));
    }

    #[test]
    fn test_routed_page_without_metadata_is_error() {
        let mut routes = routes_with_home();
        routes.insert("/gallery", PageKey::from_static("gallery")).unwrap();

        let report = MetadataValidator::validate(&table_with_home(), &routes);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("/gallery"));
    }

    #[test]
    fn test_missing_locale_is_error() {
        let mut table = table_with_home();
        let page = PageKey::from_static("gallery");
        table.insert(page.clone(), Locale::Ru, complete_entry("Галерея"));
        table.insert(page.clone(), Locale::En, complete_entry("Gallery"));
        let mut routes = routes_with_home();
        routes.insert("/gallery", page).unwrap();

        let report = MetadataValidator::validate(&table, &routes);
        assert_eq!(
            report.errors,
            vec!["Page 'gallery' is missing 'kg' metadata".to_string()]
        );
    }

    #[test]
    fn test_empty_title_is_error() {
        let mut table = table_with_home();
        table.insert(PageKey::HOME, Locale::En, SeoEntry::new(" ", "d", "k"));

        let report = MetadataValidator::validate(&table, &routes_with_home());
        assert!(report.errors.iter().any(|e| e.contains("empty 'en' title")));
    }

    // ==================== Warning Tests ====================

    #[test]
    fn test_empty_keywords_is_warning() {
        let mut table = table_with_home();
        table.insert(PageKey::HOME, Locale::Ru, SeoEntry::new("Главная", "d", ""));

        let report = MetadataValidator::validate(&table, &routes_with_home());
        assert!(!report.has_errors());
        assert!(report.warnings.iter().any(|w| w.contains("keywords")));
    }

    #[test]
    fn test_duplicate_title_is_warning() {
        let mut table = table_with_home();
        let page = PageKey::from_static("twin");
        for locale in Locale::ALL {
            table.insert(page.clone(), locale, complete_entry(&format!("Home {}", locale)));
        }
        let mut routes = routes_with_home();
        routes.insert("/twin", page).unwrap();

        let report = MetadataValidator::validate(&table, &routes);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 3);
        assert!(report.warnings[0].contains("share"));
    }

    #[test]
    fn test_unrouted_page_is_warning() {
        let mut table = table_with_home();
        for locale in Locale::ALL {
            table.insert(
                PageKey::from_static("orphan"),
                locale,
                complete_entry(&format!("Orphan {}", locale)),
            );
        }

        let report = MetadataValidator::validate(&table, &routes_with_home());
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("no route"));
    }

    // ==================== ValidationReport Tests ====================

    #[test]
    fn test_report_default_is_clean() {
        let report = ValidationReport::default();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }
}
