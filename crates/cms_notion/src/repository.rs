use std::sync::Arc;

use tracing::{debug, warn};

use cms_core::models::{Article, ArticleSummary};
use cms_core::render::render_document;
use cms_core::{Error, Result};

use crate::client::ContentApi;
use crate::extract::{self, PROP_CATEGORY, PROP_CREATED_AT, PROP_PUBLISHED, PROP_SLUG};
use crate::query::{CollectionQuery, Filter, Sort};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Read-side repository over the upstream collection. Stateless: every
/// call is a fresh request/response cycle, nothing is cached or retried.
pub struct ArticleRepository {
    api: Arc<dyn ContentApi>,
    collection_id: String,
}

impl ArticleRepository {
    pub fn new(api: Arc<dyn ContentApi>, collection_id: impl Into<String>) -> Self {
        Self {
            api,
            collection_id: collection_id.into(),
        }
    }

    /// Published pages, newest first, capped at `limit`. Pages that fail
    /// extraction are logged and skipped so one malformed page cannot
    /// break the whole listing.
    pub async fn list_published(&self, limit: u32) -> Result<Vec<ArticleSummary>> {
        let query = CollectionQuery {
            filter: Some(Filter::checkbox_equals(PROP_PUBLISHED, true)),
            sorts: vec![Sort::descending(PROP_CREATED_AT)],
            page_size: Some(limit),
        };
        let pages = self.api.query_collection(&self.collection_id, &query).await?;
        debug!(count = pages.len(), "fetched published pages");

        let mut summaries = Vec::with_capacity(pages.len());
        for page in &pages {
            match extract::extract_summary(page) {
                Ok(summary) => summaries.push(summary),
                Err(error) => warn!(page = %page.id, %error, "skipping unlistable page"),
            }
        }
        Ok(summaries)
    }

    pub async fn list_categories(&self) -> Result<Vec<String>> {
        let schema = self.api.collection_schema(&self.collection_id).await?;
        Ok(extract::extract_categories(&schema))
    }

    /// Full article lookup by (category, slug). Duplicate matches
    /// tie-break to the most recently created page; extraction failures
    /// here fail the whole request.
    pub async fn get_article(&self, category: &str, slug: &str) -> Result<Article> {
        let query = CollectionQuery {
            filter: Some(Filter::and(vec![
                Filter::select_equals(PROP_CATEGORY, category),
                Filter::rich_text_equals(PROP_SLUG, slug),
            ])),
            sorts: vec![Sort::descending(PROP_CREATED_AT)],
            page_size: None,
        };
        let pages = self.api.query_collection(&self.collection_id, &query).await?;
        if pages.len() > 1 {
            warn!(category, slug, count = pages.len(), "ambiguous match, taking newest");
        }
        let page = pages.into_iter().next().ok_or_else(|| Error::NotFound {
            category: category.to_string(),
            slug: slug.to_string(),
        })?;

        let blocks = self.api.child_blocks(&page.id).await?;
        let body_html = render_document(&extract::content_blocks(&blocks));
        extract::extract_article(&page, body_html)
    }
}
