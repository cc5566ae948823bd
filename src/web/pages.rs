//! Per-page content plans and their concurrent execution.
//!
//! A page's body is a list of sections, each backed by one content API
//! call. Sections are fetched concurrently and fail independently: one
//! broken endpoint turns into an error panel for that section only.

use crate::content::{ContentClient, ContentError, Filters};
use crate::i18n::Locale;
use crate::routes::RouteMatch;
use futures::future::join_all;
use serde_json::Value;
use tracing::warn;

/// Number of announcements and news items shown on the home page.
pub const HOME_FEED_SIZE: usize = 3;

/// One content API call backing a page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionRequest {
    Announcements(Filters),
    News(Filters),
    Programs(Filters),
    Staff(Filters),
    Documents(Filters),
    AnnouncementItem(String),
    NewsItem(String),
    Contacts,
}

impl SectionRequest {
    /// Detail page path for an item of this section's list, if it has one.
    pub fn detail_path(&self, id: &str) -> Option<String> {
        match self {
            SectionRequest::News(_) => Some(format!("/news/{}", urlencoding::encode(id))),
            SectionRequest::Announcements(_) => {
                Some(format!("/announcement/{}", urlencoding::encode(id)))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSection {
    pub request: SectionRequest,
    /// Keep at most this many list items
    pub limit: Option<usize>,
}

impl PlannedSection {
    fn all(request: SectionRequest) -> Self {
        Self {
            request,
            limit: None,
        }
    }

    fn first(request: SectionRequest, limit: usize) -> Self {
        Self {
            request,
            limit: Some(limit),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Items(Vec<Value>),
    Item(Value),
}

#[derive(Debug)]
pub struct Section {
    pub request: SectionRequest,
    pub outcome: Result<SectionContent, ContentError>,
}

fn filters(pairs: &[(&str, &str)]) -> Filters {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Sections to fetch for a resolved route. Pages without dynamic content
/// have an empty plan.
pub fn content_plan(route: &RouteMatch) -> Vec<PlannedSection> {
    let id = route.param_value().map(str::to_string);

    match (route.page_key.as_str(), id) {
        ("home", _) => {
            let page_size = HOME_FEED_SIZE.to_string();
            vec![
                PlannedSection::first(
                    SectionRequest::Announcements(filters(&[("page_size", page_size.as_str())])),
                    HOME_FEED_SIZE,
                ),
                PlannedSection::first(
                    SectionRequest::News(filters(&[("page_size", page_size.as_str())])),
                    HOME_FEED_SIZE,
                ),
            ]
        }
        ("news", _) => vec![PlannedSection::all(SectionRequest::News(Filters::new()))],
        ("announcements", _) => vec![PlannedSection::all(SectionRequest::Announcements(
            Filters::new(),
        ))],
        ("news_detail", Some(id)) => vec![PlannedSection::all(SectionRequest::NewsItem(id))],
        ("announcement_detail", Some(id)) => {
            vec![PlannedSection::all(SectionRequest::AnnouncementItem(id))]
        }
        ("academy_leadership", _) => vec![PlannedSection::all(SectionRequest::Staff(filters(&[(
            "category",
            "leadership",
        )])))],
        ("education_departments", _) => vec![PlannedSection::all(SectionRequest::Staff(
            filters(&[("category", "teaching")]),
        ))],
        ("academy_documents", _) => vec![PlannedSection::all(SectionRequest::Documents(
            filters(&[("category", "official")]),
        ))],
        ("admissions_rules", _) => vec![PlannedSection::all(SectionRequest::Documents(
            filters(&[("category", "admissions")]),
        ))],
        ("education_schedule", _) => vec![PlannedSection::all(SectionRequest::Documents(
            filters(&[("category", "schedule")]),
        ))],
        ("education_programs", _) => {
            vec![PlannedSection::all(SectionRequest::Programs(Filters::new()))]
        }
        ("admissions_bachelor", _) => vec![PlannedSection::all(SectionRequest::Programs(
            filters(&[("level", "bachelor")]),
        ))],
        ("admissions_master", _) => vec![PlannedSection::all(SectionRequest::Programs(
            filters(&[("level", "master")]),
        ))],
        ("sport_achievements", _) => vec![PlannedSection::all(SectionRequest::News(filters(&[(
            "category",
            "achievements",
        )])))],
        ("science_conferences", _) => vec![PlannedSection::all(
            SectionRequest::Announcements(filters(&[("category", "conferences")])),
        )],
        ("contacts", _) => vec![PlannedSection::all(SectionRequest::Contacts)],
        _ => Vec::new(),
    }
}

async fn fetch_section(
    client: &ContentClient,
    locale: Locale,
    planned: &PlannedSection,
) -> Section {
    let outcome = match &planned.request {
        SectionRequest::Announcements(f) => client
            .get_announcements(locale, Some(f))
            .await
            .map(SectionContent::Items),
        SectionRequest::News(f) => client
            .get_news(locale, Some(f))
            .await
            .map(SectionContent::Items),
        SectionRequest::Programs(f) => client
            .get_programs(locale, Some(f))
            .await
            .map(SectionContent::Items),
        SectionRequest::Staff(f) => client
            .get_staff(locale, Some(f))
            .await
            .map(SectionContent::Items),
        SectionRequest::Documents(f) => client
            .get_documents(locale, Some(f))
            .await
            .map(SectionContent::Items),
        SectionRequest::AnnouncementItem(id) => client
            .get_announcement(locale, id)
            .await
            .map(SectionContent::Item),
        SectionRequest::NewsItem(id) => client
            .get_news_item(locale, id)
            .await
            .map(SectionContent::Item),
        SectionRequest::Contacts => client.get_contacts(locale).await.map(SectionContent::Item),
    };

    let outcome = match (outcome, planned.limit) {
        (Ok(SectionContent::Items(mut items)), Some(limit)) => {
            items.truncate(limit);
            Ok(SectionContent::Items(items))
        }
        (other, _) => other,
    };

    if let Err(e) = &outcome {
        warn!("Section {} failed: {}", e.endpoint(), e);
    }

    Section {
        request: planned.request.clone(),
        outcome,
    }
}

/// Fetch every planned section concurrently, preserving plan order.
pub async fn fetch_sections(
    client: &ContentClient,
    locale: Locale,
    plan: &[PlannedSection],
) -> Vec<Section> {
    join_all(
        plan.iter()
            .map(|planned| fetch_section(client, locale, planned)),
    )
    .await
}

/// PDF links shown in the navigation bar. Failures only hide the links.
pub async fn fetch_navbar_documents(client: &ContentClient, locale: Locale) -> Vec<Value> {
    match client
        .get_documents(locale, Some(&filters(&[("placement", "navbar")])))
        .await
    {
        Ok(documents) => documents,
        Err(e) => {
            warn!("Navbar documents unavailable: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{resolve_page_key, RouteTable};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn plan_for(path: &str) -> Vec<PlannedSection> {
        content_plan(&RouteTable::builtin().resolve_match(path))
    }

    // ==================== content_plan Tests ====================

    #[test]
    fn test_home_plan_fetches_feeds() {
        let plan = plan_for("/");
        assert_eq!(plan.len(), 2);
        assert!(matches!(plan[0].request, SectionRequest::Announcements(_)));
        assert!(matches!(plan[1].request, SectionRequest::News(_)));
        assert!(plan.iter().all(|s| s.limit == Some(HOME_FEED_SIZE)));
    }

    #[test]
    fn test_unknown_path_uses_home_plan() {
        assert_eq!(resolve_page_key("/missing").as_str(), "home");
        assert_eq!(plan_for("/missing"), plan_for("/"));
    }

    #[test]
    fn test_news_detail_plan_uses_id() {
        let plan = plan_for("/news/Cup-2026");
        assert_eq!(
            plan,
            vec![PlannedSection::all(SectionRequest::NewsItem(
                "Cup-2026".to_string()
            ))]
        );
    }

    #[test]
    fn test_leadership_plan_filters_staff() {
        let plan = plan_for("/academy/leadership");
        assert_eq!(
            plan[0].request,
            SectionRequest::Staff(filters(&[("category", "leadership")]))
        );
    }

    #[test]
    fn test_static_text_page_has_empty_plan() {
        assert!(plan_for("/privacy").is_empty());
        assert!(plan_for("/academy/about").is_empty());
    }

    #[test]
    fn test_detail_paths() {
        assert_eq!(
            SectionRequest::News(Filters::new()).detail_path("5"),
            Some("/news/5".to_string())
        );
        assert_eq!(
            SectionRequest::Announcements(Filters::new()).detail_path("5"),
            Some("/announcement/5".to_string())
        );
        assert_eq!(SectionRequest::Contacts.detail_path("5"), None);
        assert_eq!(
            SectionRequest::News(Filters::new()).detail_path("кубок 1"),
            Some("/news/%D0%BA%D1%83%D0%B1%D0%BE%D0%BA%201".to_string())
        );
    }

    // ==================== fetch_sections Tests ====================

    #[tokio::test]
    async fn test_sections_fail_independently_and_keep_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/announcements/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/news/"))
            .and(query_param("page_size", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"id": 1}, {"id": 2}, {"id": 3}, {"id": 4}]
            })))
            .mount(&server)
            .await;

        let client = ContentClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let sections = fetch_sections(&client, Locale::Ru, &plan_for("/")).await;

        assert_eq!(sections.len(), 2);
        assert!(sections[0].outcome.is_err());
        match &sections[1].outcome {
            Ok(SectionContent::Items(items)) => assert_eq!(items.len(), HOME_FEED_SIZE),
            other => panic!("Expected items, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_navbar_documents_failure_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/documents/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = ContentClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        assert!(fetch_navbar_documents(&client, Locale::En).await.is_empty());
    }

    #[tokio::test]
    async fn test_navbar_documents_sends_placement() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/documents/"))
            .and(query_param("placement", "navbar"))
            .and(query_param("lang", "en"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"title": "Charter", "file": "/media/charter.pdf"}])),
            )
            .mount(&server)
            .await;

        let client = ContentClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let documents = fetch_navbar_documents(&client, Locale::En).await;
        assert_eq!(documents.len(), 1);
    }
}
