//! SEO metadata: the localized `(PageKey, Locale)` table, the per-request
//! document head and the applier that patches one with the other.
//!
//! # Architecture
//!
//! - `table`: Centralized metadata table with the locale fallback chain
//! - `head`: Document head with upsert-by-name meta tags
//! - `applier`: Idempotent application of table entries to a head
//! - `validator`: Completeness checks against the route table

mod applier;
mod builtin;
mod head;
mod table;
mod validator;

pub use applier::{AppliedMetadata, SeoApplier, DESCRIPTION_META, KEYWORDS_META};
pub use head::{DocumentHead, MetaTag};
pub use table::{MetadataLoadError, MetadataTable, ResolvedMetadata, SeoEntry};
pub use validator::{MetadataValidator, ValidationReport};
