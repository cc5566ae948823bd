//! HTTP shell: router, shared state and page handlers.

mod handlers;
mod pages;
mod render;

pub use handlers::{select_locale, SeoResponse, LANG_COOKIE};
pub use pages::{content_plan, PlannedSection, Section, SectionContent, SectionRequest};
pub use render::{render_page, PageView};

use crate::config::Config;
use crate::content::ContentClient;
use crate::routes::RouteTable;
use crate::seo::{MetadataTable, MetadataValidator, SeoApplier};
use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// State shared by all handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub routes: Arc<RouteTable>,
    pub seo: SeoApplier,
    pub content: ContentClient,
}

impl AppState {
    pub fn new(config: Config, routes: RouteTable, table: MetadataTable) -> Result<Self> {
        let content = ContentClient::from_config(&config)?;
        Ok(Self {
            config: Arc::new(config),
            routes: Arc::new(routes),
            seo: SeoApplier::new(Arc::new(table)),
            content,
        })
    }

    /// Build state from configuration: builtin routes, builtin metadata
    /// merged with `SEO_METADATA_FILE` when set.
    pub fn from_config(config: Config) -> Result<Self> {
        let table = load_metadata(&config)?;
        let state = Self::new(config, RouteTable::builtin().clone(), table)?;

        let report = MetadataValidator::validate(state.seo.table(), &state.routes);
        for error in &report.errors {
            warn!("SEO metadata error: {}", error);
        }
        for warning in &report.warnings {
            warn!("SEO metadata warning: {}", warning);
        }

        Ok(state)
    }
}

/// Builtin metadata with the optional override file merged on top.
pub fn load_metadata(config: &Config) -> Result<MetadataTable> {
    let mut table = MetadataTable::builtin();
    if let Some(json) = config.read_seo_metadata_file()? {
        let merged = table
            .merge_json(&json)
            .context("Invalid SEO_METADATA_FILE")?;
        info!("Loaded {} SEO metadata entries from file", merged);
    }
    Ok(table)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health))
        .route("/api/seo", get(handlers::seo_metadata))
        .fallback(handlers::page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
