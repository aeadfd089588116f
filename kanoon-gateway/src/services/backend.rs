use async_trait::async_trait;
use thiserror::Error;

/// Identifier of a document in the upstream index.
pub type DocId = u64;

/// Error type for backend operations.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IK API token is not configured")]
    NotConfigured,

    #[error("IK API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A search as received by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub page_number: u32,
    pub max_pages: u32,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, page_number: u32, max_pages: u32) -> Self {
        Self {
            query: query.into(),
            page_number,
            max_pages,
        }
    }
}

/// The legal search service the gateway fronts.
///
/// Every operation yields the upstream JSON as an unparsed string. `Ok(None)`
/// means the upstream had nothing to return; the gateway reports that as
/// "not found".
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Option<String>, BackendError>;

    async fn fetch_doc(&self, doc_id: DocId) -> Result<Option<String>, BackendError>;

    async fn fetch_doc_meta(&self, doc_id: DocId) -> Result<Option<String>, BackendError>;

    async fn fetch_doc_fragment(
        &self,
        doc_id: DocId,
        form_input: &str,
    ) -> Result<Option<String>, BackendError>;
}
