//! Read-only client for the remote content API.
//!
//! The backend is inconsistent about response envelopes: some endpoints
//! return a bare array, some wrap it in `{"results": [...]}` (paginated) or
//! `{"data": ...}`, and single-object endpoints return the object itself.
//! Every method here normalizes the body with [`normalize_body`] so callers
//! only ever see a list or an object.
//!
//! Each call is independent: no retries, no caching, no de-duplication.

use crate::config::Config;
use crate::i18n::Locale;
use anyhow::{Context, Result};
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Extra query parameters passed through to the API verbatim.
pub type Filters = BTreeMap<String, String>;

/// Query parameter carrying the locale on every request.
const LANG_PARAM: &str = "lang";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Content API error ({status}) for {endpoint}")]
    Status { endpoint: String, status: StatusCode },

    #[error("Failed to parse response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected response shape from {endpoint}: expected {expected}")]
    UnexpectedShape {
        endpoint: String,
        expected: &'static str,
    },
}

impl ContentError {
    pub fn endpoint(&self) -> &str {
        match self {
            ContentError::Transport { endpoint, .. }
            | ContentError::Status { endpoint, .. }
            | ContentError::Decode { endpoint, .. }
            | ContentError::UnexpectedShape { endpoint, .. } => endpoint,
        }
    }

    /// HTTP status for non-2xx responses.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ContentError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Resource families exposed by the content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Announcements,
    News,
    Programs,
    Staff,
    /// PDF documents
    Documents,
    Contacts,
}

impl Resource {
    /// Path segment under the API base URL.
    pub fn segment(&self) -> &'static str {
        match self {
            Resource::Announcements => "announcements",
            Resource::News => "news",
            Resource::Programs => "programs",
            Resource::Staff => "staff",
            Resource::Documents => "documents",
            Resource::Contacts => "contacts",
        }
    }
}

/// Apply the response normalization rule.
///
/// Array → unchanged; object with an array `results` → that array; object
/// with `data` → that value; anything else → the body itself.
pub fn normalize_body(body: Value) -> Value {
    match body {
        Value::Object(mut map) => {
            if matches!(map.get("results"), Some(Value::Array(_))) {
                return map.remove("results").unwrap_or(Value::Null);
            }
            if let Some(data) = map.remove("data") {
                return data;
            }
            Value::Object(map)
        }
        other => other,
    }
}

#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ContentClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid content API URL '{}'", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Content API URL '{}' cannot be used as a base", base_url);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.content_api_url, config.content_api_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ==================== Resource Methods ====================

    pub async fn get_announcements(
        &self,
        locale: Locale,
        filters: Option<&Filters>,
    ) -> Result<Vec<Value>, ContentError> {
        self.get_list(Resource::Announcements, locale, filters).await
    }

    pub async fn get_announcement(&self, locale: Locale, id: &str) -> Result<Value, ContentError> {
        self.get_item(Resource::Announcements, id, locale).await
    }

    pub async fn get_news(
        &self,
        locale: Locale,
        filters: Option<&Filters>,
    ) -> Result<Vec<Value>, ContentError> {
        self.get_list(Resource::News, locale, filters).await
    }

    pub async fn get_news_item(&self, locale: Locale, id: &str) -> Result<Value, ContentError> {
        self.get_item(Resource::News, id, locale).await
    }

    pub async fn get_programs(
        &self,
        locale: Locale,
        filters: Option<&Filters>,
    ) -> Result<Vec<Value>, ContentError> {
        self.get_list(Resource::Programs, locale, filters).await
    }

    pub async fn get_staff(
        &self,
        locale: Locale,
        filters: Option<&Filters>,
    ) -> Result<Vec<Value>, ContentError> {
        self.get_list(Resource::Staff, locale, filters).await
    }

    pub async fn get_documents(
        &self,
        locale: Locale,
        filters: Option<&Filters>,
    ) -> Result<Vec<Value>, ContentError> {
        self.get_list(Resource::Documents, locale, filters).await
    }

    pub async fn get_contacts(&self, locale: Locale) -> Result<Value, ContentError> {
        self.get_object(&[Resource::Contacts.segment()], locale, None)
            .await
    }

    // ==================== Shape Helpers ====================

    /// Fetch a collection endpoint; the normalized body must be an array.
    pub async fn get_list(
        &self,
        resource: Resource,
        locale: Locale,
        filters: Option<&Filters>,
    ) -> Result<Vec<Value>, ContentError> {
        let segments = [resource.segment()];
        match self.get_object(&segments, locale, filters).await? {
            Value::Array(items) => Ok(items),
            _ => Err(ContentError::UnexpectedShape {
                endpoint: endpoint_label(&segments),
                expected: "array",
            }),
        }
    }

    /// Fetch a single entity of a collection by id.
    pub async fn get_item(
        &self,
        resource: Resource,
        id: &str,
        locale: Locale,
    ) -> Result<Value, ContentError> {
        self.get_object(&[resource.segment(), id], locale, None)
            .await
    }

    /// Fetch and normalize any endpoint under the base URL.
    async fn get_object(
        &self,
        segments: &[&str],
        locale: Locale,
        filters: Option<&Filters>,
    ) -> Result<Value, ContentError> {
        let endpoint = endpoint_label(segments);
        let url = self.endpoint_url(segments);

        let extra: Vec<(&str, &str)> = filters
            .into_iter()
            .flatten()
            .filter(|(name, _)| name.as_str() != LANG_PARAM)
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();

        debug!("GET {} (lang={}, {} filters)", endpoint, locale.api_code(), extra.len());

        let response = self
            .http
            .get(url)
            .query(&[(LANG_PARAM, locale.api_code())])
            .query(&extra)
            .send()
            .await
            .map_err(|source| ContentError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status { endpoint, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ContentError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let value: Value = serde_json::from_slice(&body)
            .map_err(|source| ContentError::Decode { endpoint, source })?;

        Ok(normalize_body(value))
    }

    fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(segments);
            path.push("");
        }
        url
    }
}

fn endpoint_label(segments: &[&str]) -> String {
    format!("/{}/", segments.join("/"))
}
