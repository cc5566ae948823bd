use crate::i18n::{normalize_locale, Locale};
use crate::routes::{clean_path, normalize_path, PageKey};
use crate::seo::{DocumentHead, ResolvedMetadata};
use crate::web::pages::{content_plan, fetch_navbar_documents, fetch_sections};
use crate::web::render::{render_page, PageView};
use crate::web::AppState;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name of the cookie remembering the chosen language.
pub const LANG_COOKIE: &str = "lang";

/// Query parameter selecting the language of a page.
const LANG_PARAM: &str = "lang";

const LANG_COOKIE_MAX_AGE_SECS: u32 = 365 * 24 * 60 * 60;

#[derive(Debug, Deserialize)]
pub struct SeoQuery {
    pub path: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SeoResponse {
    /// Canonical form of the requested path
    pub path: String,
    /// Page the path routes to, before any metadata fallback
    pub route: PageKey,
    #[serde(flatten)]
    pub metadata: ResolvedMetadata,
}

pub async fn health() -> &'static str {
    "ok"
}

/// Metadata a page would get, as JSON.
pub async fn seo_metadata(
    State(state): State<AppState>,
    Query(query): Query<SeoQuery>,
) -> Json<SeoResponse> {
    let raw_path = query.path.as_deref().unwrap_or("/");
    let locale = normalize_locale(query.lang.as_deref().unwrap_or_default());
    let route = state.routes.resolve(raw_path);
    let metadata = state.seo.resolve(&route, locale);

    Json(SeoResponse {
        path: normalize_path(raw_path),
        route,
        metadata,
    })
}

/// Value of the `lang` cookie, if the request carries one.
fn cookie_lang(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == LANG_COOKIE)
        .map(|(_, value)| value.trim().to_string())
}

/// Locale for a request: `?lang=`, then the `lang` cookie, then the primary locale.
pub fn select_locale(query_lang: Option<&str>, headers: &HeaderMap) -> Locale {
    match query_lang {
        Some(lang) => normalize_locale(lang),
        None => cookie_lang(headers)
            .map(|lang| normalize_locale(&lang))
            .unwrap_or(Locale::PRIMARY),
    }
}

/// First `lang` value of a raw query string. Repeated parameters do not
/// invalidate the query.
fn query_lang(query: Option<&str>) -> Option<String> {
    query?
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(name, _)| *name == LANG_PARAM)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or(value)
        })
}

/// Same-site link back to the current page. The path is cleaned so it always
/// has a single leading `/`; backslashes are escaped so browsers cannot read
/// `/\host` as another origin.
fn page_link(path: &str, query: Option<&str>) -> (String, String) {
    let path = clean_path(path).replace('\\', "%5C");
    let retry = match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{}?{}", path, query),
        None => path.clone(),
    };
    (path, retry)
}

fn lang_cookie(locale: Locale) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        LANG_COOKIE,
        locale.code(),
        LANG_COOKIE_MAX_AGE_SECS
    )
}

/// Catch-all page handler. Any path renders a page; unknown paths get the
/// home page.
pub async fn page(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let query_lang = query_lang(uri.query());
    let locale = select_locale(query_lang.as_deref(), &headers);

    let route = state.routes.resolve_match(uri.path());
    debug!("Rendering {} as {} ({})", uri.path(), route.page_key, locale);

    let mut head = DocumentHead::new();
    state.seo.apply(&mut head, &route.page_key, locale);

    let plan = content_plan(&route);
    let (sections, navbar_documents) = futures::join!(
        fetch_sections(&state.content, locale, &plan),
        fetch_navbar_documents(&state.content, locale),
    );

    let (path, retry_href) = page_link(uri.path(), uri.query());

    let html = render_page(&PageView {
        head: &head,
        locale,
        path: &path,
        retry_href: &retry_href,
        sections: &sections,
        navbar_documents: &navbar_documents,
        year: chrono::Utc::now().year(),
    });

    let mut response = Html(html).into_response();
    if query_lang.is_some() {
        if let Ok(cookie) = HeaderValue::from_str(&lang_cookie(locale)) {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
    }
    response
}
