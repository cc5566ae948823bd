use crate::i18n::Locale;
use crate::routes::PageKey;
use crate::seo::{DocumentHead, MetadataTable, ResolvedMetadata};
use std::sync::Arc;
use tracing::debug;

pub const DESCRIPTION_META: &str = "description";
pub const KEYWORDS_META: &str = "keywords";

/// Result of applying metadata to a head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMetadata {
    pub metadata: ResolvedMetadata,
    /// `false` when the head already held exactly these values
    pub changed: bool,
}

/// Applies localized SEO metadata from a shared table to document heads.
#[derive(Debug, Clone)]
pub struct SeoApplier {
    table: Arc<MetadataTable>,
}

impl SeoApplier {
    pub fn new(table: Arc<MetadataTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &MetadataTable {
        &self.table
    }

    pub fn resolve(&self, page_key: &PageKey, locale: Locale) -> ResolvedMetadata {
        self.table.resolve(page_key, locale)
    }

    /// Patch `head` with the metadata of `page_key` in `locale`.
    ///
    /// Title, description, keywords and language are patched independently.
    /// An empty description or keywords value removes that tag. Applying the
    /// same arguments again leaves the head unchanged.
    pub fn apply(&self, head: &mut DocumentHead, page_key: &PageKey, locale: Locale) -> AppliedMetadata {
        let metadata = self.resolve(page_key, locale);

        if metadata.is_fallback(page_key) {
            debug!(
                "SEO fallback for {}/{}: using {}/{}",
                page_key,
                locale,
                metadata.page_key,
                metadata
                    .source_locale
                    .map(|l| l.code())
                    .unwrap_or("none")
            );
        }

        let mut changed = head.set_lang(locale.html_lang());
        changed |= head.set_title(&metadata.title);
        changed |= patch_meta(head, DESCRIPTION_META, &metadata.description);
        changed |= patch_meta(head, KEYWORDS_META, &metadata.keywords);

        AppliedMetadata { metadata, changed }
    }
}

fn patch_meta(head: &mut DocumentHead, name: &str, content: &str) -> bool {
    if content.trim().is_empty() {
        head.remove_meta(name)
    } else {
        head.set_meta(name, content)
    }
}
