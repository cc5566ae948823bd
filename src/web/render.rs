//! Minimal HTML rendering of a page: head, navigation, sections, footer.

use crate::html::escape_html;
use crate::i18n::{Locale, LocaleRegistry, LocaleStrings};
use crate::seo::DocumentHead;
use crate::web::pages::{Section, SectionContent, SectionRequest};
use serde_json::Value;

const TITLE_FIELDS: &[&str] = &["title", "name", "full_name"];
const SUMMARY_FIELDS: &[&str] = &["position", "short_description", "description", "published_at", "date"];
const BODY_FIELDS: &[&str] = &["content", "text", "body", "description"];
const FILE_FIELDS: &[&str] = &["file", "pdf", "url"];

/// Everything needed to render one page.
pub struct PageView<'a> {
    pub head: &'a DocumentHead,
    pub locale: Locale,
    /// Cleaned path of the current page (single leading `/`), used by the
    /// language switcher
    pub path: &'a str,
    /// Cleaned path plus the request query, used by retry links
    pub retry_href: &'a str,
    pub sections: &'a [Section],
    pub navbar_documents: &'a [Value],
    pub year: i32,
}

/// Text form of a scalar JSON value.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_field(item: &Value, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| item.get(*field).and_then(value_text))
}

/// Whether an API-provided URL may be used as a link target: absolute
/// `http(s)` or root-relative on this site.
pub fn is_safe_href(href: &str) -> bool {
    let href = href.trim();
    let lower = href.to_ascii_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || (href.starts_with('/') && !href.starts_with("//") && !href.starts_with("/\\"))
}

fn file_href(item: &Value) -> Option<String> {
    first_field(item, FILE_FIELDS).filter(|href| is_safe_href(href))
}

pub fn render_page(view: &PageView<'_>) -> String {
    let strings = view.locale.strings();
    let lang = view.head.lang().unwrap_or(view.locale.html_lang());

    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape_html(lang)));
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&view.head.render());
    html.push_str("\n</head>\n<body>\n");

    html.push_str(&render_nav(view, strings));

    html.push_str("<main>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(view.head.title())));
    for section in view.sections {
        html.push_str(&render_section(section, strings, view.retry_href));
    }
    html.push_str("</main>\n");

    html.push_str(&render_footer(strings, view.year));
    html.push_str("</body>\n</html>\n");
    html
}

fn render_nav(view: &PageView<'_>, strings: &LocaleStrings) -> String {
    let links = [
        ("/academy/about", strings.nav_academy),
        ("/admissions/bachelor", strings.nav_admissions),
        ("/education/programs", strings.nav_education),
        ("/sport/teams", strings.nav_sport),
        ("/science/research", strings.nav_science),
        ("/students/life", strings.nav_students),
        ("/news", strings.nav_news),
        ("/announcements", strings.nav_announcements),
        ("/contacts", strings.nav_contacts),
    ];

    let mut html = String::from("<header>\n<nav>\n");
    html.push_str(&format!(
        "<a class=\"brand\" href=\"/\">{}</a>\n<ul>\n",
        escape_html(strings.site_name)
    ));
    for (href, label) in links {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            href,
            escape_html(label)
        ));
    }
    html.push_str("</ul>\n");

    let documents: Vec<(String, String)> = view
        .navbar_documents
        .iter()
        .filter_map(|doc| Some((first_field(doc, TITLE_FIELDS)?, file_href(doc)?)))
        .collect();
    if !documents.is_empty() {
        html.push_str(&format!(
            "<div class=\"nav-documents\"><span>{}</span>\n<ul>\n",
            escape_html(strings.nav_documents)
        ));
        for (title, href) in documents {
            html.push_str(&format!(
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>\n",
                escape_html(&href),
                escape_html(&title)
            ));
        }
        html.push_str("</ul>\n</div>\n");
    }

    html.push_str("<ul class=\"languages\">\n");
    for config in LocaleRegistry::get().list_all() {
        let current = if config.locale == view.locale {
            " aria-current=\"true\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<li><a href=\"{}?lang={}\"{} hreflang=\"{}\" title=\"{}\">{}</a></li>\n",
            escape_html(view.path),
            config.code,
            current,
            config.html_lang,
            escape_html(config.name),
            escape_html(config.native_name)
        ));
    }
    html.push_str("</ul>\n</nav>\n</header>\n");
    html
}

fn render_section(section: &Section, strings: &LocaleStrings, retry_href: &str) -> String {
    match &section.outcome {
        Ok(SectionContent::Items(items)) => render_items(&section.request, items, strings),
        Ok(SectionContent::Item(item)) if section.request == SectionRequest::Contacts => {
            render_fields(item)
        }
        Ok(SectionContent::Item(item)) => render_item(item),
        Err(_) => render_error_panel(strings, retry_href),
    }
}

fn render_items(request: &SectionRequest, items: &[Value], strings: &LocaleStrings) -> String {
    if items.is_empty() {
        return format!(
            "<section>\n<p class=\"empty\">{}</p>\n</section>\n",
            escape_html(strings.empty_list)
        );
    }

    let mut html = String::from("<section>\n<ul class=\"items\">\n");
    for item in items {
        html.push_str("<li>");
        if let Some(title) = first_field(item, TITLE_FIELDS) {
            html.push_str(&format!("<h3>{}</h3>", escape_html(&title)));
        }
        if let Some(summary) = first_field(item, SUMMARY_FIELDS) {
            html.push_str(&format!("<p>{}</p>", escape_html(&summary)));
        }
        if let Some(href) = file_href(item) {
            html.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                escape_html(&href),
                escape_html(strings.download)
            ));
        } else if let Some(detail) = item
            .get("id")
            .and_then(value_text)
            .and_then(|id| request.detail_path(&id))
        {
            html.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&detail),
                escape_html(strings.read_more)
            ));
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n</section>\n");
    html
}

fn render_item(item: &Value) -> String {
    let mut html = String::from("<article>\n");
    if let Some(title) = first_field(item, TITLE_FIELDS) {
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&title)));
    }
    if let Some(date) = first_field(item, &["published_at", "date"]) {
        html.push_str(&format!("<time>{}</time>\n", escape_html(&date)));
    }
    if let Some(body) = first_field(item, BODY_FIELDS) {
        for paragraph in body.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            html.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
        }
    }
    html.push_str("</article>\n");
    html
}

fn render_fields(item: &Value) -> String {
    let mut html = String::from("<section>\n<dl>\n");
    if let Value::Object(map) = item {
        for (name, value) in map {
            if let Some(text) = value_text(value) {
                html.push_str(&format!(
                    "<dt>{}</dt><dd>{}</dd>\n",
                    escape_html(name),
                    escape_html(&text)
                ));
            }
        }
    }
    html.push_str("</dl>\n</section>\n");
    html
}

fn render_error_panel(strings: &LocaleStrings, retry_href: &str) -> String {
    format!(
        "<section class=\"load-error\" role=\"alert\">\n<p>{}</p>\n<a class=\"retry\" href=\"{}\">{}</a>\n</section>\n",
        escape_html(strings.load_failed),
        escape_html(retry_href),
        escape_html(strings.retry)
    )
}

fn render_footer(strings: &LocaleStrings, year: i32) -> String {
    format!(
        "<footer>\n<p>{}</p>\n<a href=\"/privacy\">{}</a> <a href=\"/terms\">{}</a>\n</footer>\n",
        escape_html(&strings.footer_line(year)),
        escape_html(strings.privacy),
        escape_html(strings.terms)
    )
}
