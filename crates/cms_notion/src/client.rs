use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use cms_core::{Error, Result};

use crate::query::CollectionQuery;
use crate::wire::{Block, BlockList, CollectionSchema, Page, PageList};

pub const DEFAULT_API_BASE: &str = "https://api.notion.com/v1/";

const NOTION_VERSION: &str = "2022-06-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The three upstream operations this service consumes. A trait so tests
/// and tools can substitute a fixture for the live API.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Queries pages of a collection with a filter/sort/page-size triple.
    async fn query_collection(
        &self,
        collection_id: &str,
        query: &CollectionQuery,
    ) -> Result<Vec<Page>>;

    /// Fetches the collection schema, for category enumeration.
    async fn collection_schema(&self, collection_id: &str) -> Result<CollectionSchema>;

    /// Lists the child blocks of a page, in document order.
    async fn child_blocks(&self, page_id: &str) -> Result<Vec<Block>>;
}

#[derive(Debug)]
pub struct NotionClient {
    http: reqwest::Client,
    base: Url,
    api_key: String,
}

impl NotionClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base(api_key, DEFAULT_API_BASE)
    }

    /// Base URL override, for pointing the client at a local stub.
    pub fn with_base(api_key: impl Into<String>, base: &str) -> Result<Self> {
        let base = Url::parse(base)
            .map_err(|e| Error::Config(format!("invalid API base URL {base}: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base,
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::Config(format!("invalid endpoint {path}: {e}")))
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(Error::Upstream {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ContentApi for NotionClient {
    async fn query_collection(
        &self,
        collection_id: &str,
        query: &CollectionQuery,
    ) -> Result<Vec<Page>> {
        let url = self.endpoint(&format!("databases/{collection_id}/query"))?;
        let response = self.request(self.http.post(url)).json(query).send().await?;
        let list: PageList = Self::check(response).await?.json().await?;
        Ok(list.results)
    }

    async fn collection_schema(&self, collection_id: &str) -> Result<CollectionSchema> {
        let url = self.endpoint(&format!("databases/{collection_id}"))?;
        let response = self.request(self.http.get(url)).send().await?;
        let schema = Self::check(response).await?.json().await?;
        Ok(schema)
    }

    async fn child_blocks(&self, page_id: &str) -> Result<Vec<Block>> {
        let url = self.endpoint(&format!("blocks/{page_id}/children"))?;
        let response = self.request(self.http.get(url)).send().await?;
        let list: BlockList = Self::check(response).await?.json().await?;
        Ok(list.results)
    }
}
