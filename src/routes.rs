//! Route-to-PageKey resolution.
//!
//! Every URL path the site can receive maps to exactly one symbolic
//! [`PageKey`]. Static paths are looked up exactly; templated paths such as
//! `/news/:id` become prefix rules. Anything else resolves to `home`, so
//! resolution never fails.
//!
//! Canonical path form, applied both when the table is built and on lookup:
//! query and fragment removed, ASCII-lowercased, a single leading `/`,
//! empty and blank segments dropped and no trailing `/` except for the root.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Symbolic name of a logical page, independent of its URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageKey(Cow<'static, str>);

impl PageKey {
    /// Fallback page for unresolved paths and unknown metadata keys.
    pub const HOME: PageKey = PageKey::from_static("home");
    pub const NEWS_DETAIL: PageKey = PageKey::from_static("news_detail");
    pub const ANNOUNCEMENT_DETAIL: PageKey = PageKey::from_static("announcement_detail");

    pub const fn from_static(key: &'static str) -> Self {
        PageKey(Cow::Borrowed(key))
    }

    pub fn new(key: impl Into<String>) -> Self {
        PageKey(Cow::Owned(key.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_home(&self) -> bool {
        self.as_str() == Self::HOME.as_str()
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for PageKey {
    fn from(key: &'static str) -> Self {
        PageKey::from_static(key)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("Invalid route pattern '{0}': a dynamic segment may only appear last")]
    InvalidPattern(String),

    #[error("Route '{path}' is already bound to page '{existing}'")]
    DuplicatePath { path: String, existing: PageKey },
}

/// Built-in routing surface of the site.
const BUILTIN_ROUTES: &[(&str, &str)] = &[
    ("/", "home"),
    ("/privacy", "privacy"),
    ("/terms", "terms"),
    ("/contacts", "contacts"),
    ("/news", "news"),
    ("/announcements", "announcements"),
    ("/academy/about", "academy_about"),
    ("/academy/history", "academy_history"),
    ("/academy/leadership", "academy_leadership"),
    ("/academy/structure", "academy_structure"),
    ("/academy/documents", "academy_documents"),
    ("/admissions/bachelor", "admissions_bachelor"),
    ("/admissions/master", "admissions_master"),
    ("/admissions/rules", "admissions_rules"),
    ("/education/programs", "education_programs"),
    ("/education/departments", "education_departments"),
    ("/education/schedule", "education_schedule"),
    ("/sport/teams", "sport_teams"),
    ("/sport/achievements", "sport_achievements"),
    ("/sport/facilities", "sport_facilities"),
    ("/science/research", "science_research"),
    ("/science/conferences", "science_conferences"),
    ("/students/life", "students_life"),
    ("/students/dormitory", "students_dormitory"),
    ("/news/:id", "news_detail"),
    ("/announcement/:id", "announcement_detail"),
];

static TEMPLATE_REGEX: OnceLock<Regex> = OnceLock::new();
static BUILTIN_TABLE: OnceLock<RouteTable> = OnceLock::new();

fn template_regex() -> &'static Regex {
    TEMPLATE_REGEX.get_or_init(|| {
        Regex::new(r"^(?P<prefix>(?:/[^/:]+)*)/:(?P<param>[a-z_][a-z0-9_]*)$")
            .expect("template pattern is a valid regex")
    })
}

/// Result of resolving a path: the page and, for templated routes, the
/// captured dynamic segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub page_key: PageKey,
    /// `(name, value)` of the dynamic segment; the value is percent-decoded and
    /// keeps its original case
    pub param: Option<(String, String)>,
}

impl RouteMatch {
    pub fn param_value(&self) -> Option<&str> {
        self.param.as_ref().map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
struct PrefixRule {
    pattern: String,
    prefix: String,
    param: String,
    page_key: PageKey,
}

/// Ordered exact-path table plus ordered prefix rules for templated routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    exact: Vec<(String, PageKey)>,
    exact_index: HashMap<String, usize>,
    prefixes: Vec<PrefixRule>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's built-in route table.
    pub fn builtin() -> &'static RouteTable {
        BUILTIN_TABLE.get_or_init(|| {
            let mut table = RouteTable::new();
            for (pattern, key) in BUILTIN_ROUTES {
                table
                    .insert(pattern, PageKey::from_static(key))
                    .expect("built-in routes are valid and unique");
            }
            table
        })
    }

    /// Bind a static path or a `:param` template to a page.
    ///
    /// Static paths are normalized before insertion. A template's dynamic
    /// segment must be its last segment.
    pub fn insert(&mut self, pattern: &str, page_key: PageKey) -> Result<(), RouteTableError> {
        if pattern.contains(':') {
            return self.insert_template(pattern, page_key);
        }

        let path = normalize_path(pattern);
        if let Some(&index) = self.exact_index.get(&path) {
            return Err(RouteTableError::DuplicatePath {
                path,
                existing: self.exact[index].1.clone(),
            });
        }

        self.exact_index.insert(path.clone(), self.exact.len());
        self.exact.push((path, page_key));
        Ok(())
    }

    fn insert_template(&mut self, pattern: &str, page_key: PageKey) -> Result<(), RouteTableError> {
        let normalized = normalize_path(pattern);
        let captures = template_regex()
            .captures(&normalized)
            .ok_or_else(|| RouteTableError::InvalidPattern(pattern.to_string()))?;

        let prefix = captures["prefix"].to_string();
        let param = captures["param"].to_string();

        if let Some(existing) = self.prefixes.iter().find(|rule| rule.prefix == prefix) {
            return Err(RouteTableError::DuplicatePath {
                path: normalized,
                existing: existing.page_key.clone(),
            });
        }

        self.prefixes.push(PrefixRule {
            pattern: normalized,
            prefix,
            param,
            page_key,
        });
        Ok(())
    }

    /// Resolve a path to its page key. Total over all inputs.
    pub fn resolve(&self, path: &str) -> PageKey {
        self.resolve_match(path).page_key
    }

    /// Resolve a path, also returning the dynamic segment of templated routes.
    pub fn resolve_match(&self, path: &str) -> RouteMatch {
        let cleaned = clean_path(path);
        let canonical = cleaned.to_ascii_lowercase();

        if let Some(&index) = self.exact_index.get(&canonical) {
            return RouteMatch {
                page_key: self.exact[index].1.clone(),
                param: None,
            };
        }

        for rule in &self.prefixes {
            let Some(rest) = canonical
                .strip_prefix(rule.prefix.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
            else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }

            // ASCII lower-casing keeps byte offsets, so the id can be taken
            // from the case-preserving path.
            let start = cleaned.len() - rest.len();
            let raw = cleaned[start..].split('/').next().unwrap_or_default();

            // Request paths arrive percent-encoded; the id is decoded once
            // here and re-encoded when it is placed into an API URL.
            let value = urlencoding::decode(raw)
                .map(Cow::into_owned)
                .unwrap_or_else(|_| raw.to_string());

            return RouteMatch {
                page_key: rule.page_key.clone(),
                param: Some((rule.param.clone(), value)),
            };
        }

        RouteMatch {
            page_key: PageKey::HOME,
            param: None,
        }
    }

    /// All bound patterns with their page keys, static paths first.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &PageKey)> {
        self.exact
            .iter()
            .map(|(path, key)| (path.as_str(), key))
            .chain(
                self.prefixes
                    .iter()
                    .map(|rule| (rule.pattern.as_str(), &rule.page_key)),
            )
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve a path against the built-in route table.
pub fn resolve_page_key(path: &str) -> PageKey {
    RouteTable::builtin().resolve(path)
}

/// Canonical form of a path used for every table lookup.
pub fn normalize_path(path: &str) -> String {
    clean_path(path).to_ascii_lowercase()
}

/// Canonical form without case folding.
///
/// The result always starts with exactly one `/`, so it is safe to use as a
/// same-site link target.
pub fn clean_path(path: &str) -> String {
    let without_query = path.split(['?', '#']).next().unwrap_or_default().trim();

    let segments: Vec<&str> = without_query
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        return "/".to_string();
    }

    let mut cleaned = String::with_capacity(without_query.len() + 1);
    for segment in segments {
        cleaned.push('/');
        cleaned.push_str(segment);
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== normalize_path Tests ====================

    #[test]
    fn test_normalize_root_variants() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path("/?lang=en"), "/");
    }

    #[test]
    fn test_normalize_trailing_slash_and_case() {
        assert_eq!(normalize_path("/Academy/About/"), "/academy/about");
        assert_eq!(normalize_path("academy//about"), "/academy/about");
    }

    #[test]
    fn test_normalize_strips_query_and_fragment() {
        assert_eq!(normalize_path("/contacts?lang=kg#map"), "/contacts");
        assert_eq!(normalize_path("/contacts#map"), "/contacts");
    }

    // ==================== Exact Match Tests ====================

    #[test]
    fn test_every_static_route_resolves_to_its_key() {
        for (pattern, key) in BUILTIN_ROUTES {
            if pattern.contains(':') {
                continue;
            }
            assert_eq!(resolve_page_key(pattern).as_str(), *key, "route {}", pattern);
        }
    }

    #[test]
    fn test_static_route_with_trailing_slash_and_case() {
        assert_eq!(resolve_page_key("/ACADEMY/about/").as_str(), "academy_about");
        assert_eq!(resolve_page_key("/privacy?x=1").as_str(), "privacy");
    }

    #[test]
    fn test_exact_before_prefix() {
        // "/news" is both a static page and the root of the detail template
        assert_eq!(resolve_page_key("/news").as_str(), "news");
        assert_eq!(resolve_page_key("/news/").as_str(), "news");
    }

    // ==================== Template Tests ====================

    #[test]
    fn test_news_detail() {
        assert_eq!(resolve_page_key("/news/42"), PageKey::NEWS_DETAIL);
        assert_eq!(resolve_page_key("/news/spring-games"), PageKey::NEWS_DETAIL);
    }

    #[test]
    fn test_announcement_detail() {
        assert_eq!(
            resolve_page_key("/announcement/7"),
            PageKey::ANNOUNCEMENT_DETAIL
        );
    }

    #[test]
    fn test_plural_announcements_prefix_is_not_detail() {
        assert_eq!(resolve_page_key("/announcements/7"), PageKey::HOME);
    }

    #[test]
    fn test_resolve_match_captures_id_with_original_case() {
        let matched = RouteTable::builtin().resolve_match("/News/AbC-12/");
        assert_eq!(matched.page_key, PageKey::NEWS_DETAIL);
        assert_eq!(
            matched.param,
            Some(("id".to_string(), "AbC-12".to_string()))
        );
        assert_eq!(matched.param_value(), Some("AbC-12"));
    }

    #[test]
    fn test_resolve_match_decodes_id_once() {
        let matched = RouteTable::builtin().resolve_match("/news/%D0%BA%D1%83%D0%B1%D0%BE%D0%BA");
        assert_eq!(matched.page_key, PageKey::NEWS_DETAIL);
        assert_eq!(matched.param_value(), Some("кубок"));

        let matched = RouteTable::builtin().resolve_match("/announcement/open%20day%2525");
        assert_eq!(matched.param_value(), Some("open day%25"));
    }

    #[test]
    fn test_resolve_match_keeps_malformed_escape() {
        let matched = RouteTable::builtin().resolve_match("/news/%FF");
        assert_eq!(matched.param_value(), Some("%FF"));
    }

    #[test]
    fn test_clean_path_has_single_leading_slash() {
        assert_eq!(clean_path("//evil.example/x"), "/evil.example/x");
        assert_eq!(clean_path("/News/AbC/"), "/News/AbC");
        assert_eq!(clean_path(""), "/");
    }

    #[test]
    fn test_resolve_match_static_has_no_param() {
        let matched = RouteTable::builtin().resolve_match("/contacts");
        assert!(matched.param.is_none());
    }

    // ==================== Fallback Tests ====================

    #[test]
    fn test_unknown_paths_resolve_home() {
        for path in ["/nope", "/academy", "/academy/about/extra", "/news-archive", "%%%"] {
            assert_eq!(resolve_page_key(path), PageKey::HOME, "path {}", path);
        }
    }

    // ==================== Table Building Tests ====================

    #[test]
    fn test_insert_duplicate_path_rejected() {
        let mut table = RouteTable::new();
        table.insert("/a", PageKey::from_static("a")).unwrap();

        let err = table.insert("/A/", PageKey::from_static("b")).unwrap_err();
        assert_eq!(
            err,
            RouteTableError::DuplicatePath {
                path: "/a".to_string(),
                existing: PageKey::from_static("a"),
            }
        );
    }

    #[test]
    fn test_insert_template_not_last_rejected() {
        let mut table = RouteTable::new();
        let err = table
            .insert("/news/:id/comments", PageKey::from_static("comments"))
            .unwrap_err();
        assert!(matches!(err, RouteTableError::InvalidPattern(_)));
    }

    #[test]
    fn test_first_prefix_rule_wins() {
        let mut table = RouteTable::new();
        table.insert("/docs/:slug", PageKey::from_static("doc")).unwrap();
        table
            .insert("/docs/archive/:slug", PageKey::from_static("archived_doc"))
            .unwrap();

        assert_eq!(table.resolve("/docs/archive/1").as_str(), "doc");
    }

    #[test]
    fn test_empty_table_resolves_home() {
        let table = RouteTable::new();
        assert!(table.is_empty());
        assert_eq!(table.resolve("/"), PageKey::HOME);
    }

    #[test]
    fn test_routes_lists_every_binding() {
        let table = RouteTable::builtin();
        assert_eq!(table.len(), BUILTIN_ROUTES.len());
        assert!(table
            .routes()
            .any(|(pattern, key)| pattern == "/news/:id" && *key == PageKey::NEWS_DETAIL));
    }

    // ==================== PageKey Tests ====================

    #[test]
    fn test_page_key_static_and_owned_equal() {
        assert_eq!(PageKey::new("home"), PageKey::HOME);
        assert!(PageKey::new("home").is_home());
        assert_eq!(PageKey::HOME.to_string(), "home");
    }

    #[test]
    fn test_page_key_serde_transparent() {
        let json = serde_json::to_string(&PageKey::NEWS_DETAIL).unwrap();
        assert_eq!(json, "\"news_detail\"");
        let key: PageKey = serde_json::from_str("\"contacts\"").unwrap();
        assert_eq!(key.as_str(), "contacts");
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_resolve_is_total(path in ".*") {
            let key = resolve_page_key(&path);
            prop_assert!(!key.as_str().is_empty());
        }

        #[test]
        fn prop_normalize_is_idempotent(path in ".*") {
            let once = normalize_path(&path);
            prop_assert_eq!(normalize_path(&once), once.clone());
        }

        #[test]
        fn prop_news_ids_resolve_to_detail(id in "[A-Za-z0-9_-]{1,24}") {
            let news_path = format!("/news/{}", id);
            let announcement_path = format!("/announcement/{}", id);
            prop_assert_eq!(resolve_page_key(&news_path), PageKey::NEWS_DETAIL);
            prop_assert_eq!(
                resolve_page_key(&announcement_path),
                PageKey::ANNOUNCEMENT_DETAIL
            );
        }
    }
}
