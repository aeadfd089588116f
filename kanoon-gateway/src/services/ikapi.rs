//! Indian Kanoon API client.
//!
//! Every endpoint is called with `POST`, a `Token` authorization header and
//! an `Accept: application/json` header. The response body is passed back
//! as-is; the gateway decides how to present it.

use super::backend::{BackendError, DocId, SearchBackend, SearchQuery};
use super::storage::ResultStore;
use crate::config::{IkApiSettings, IK_DATE_FORMAT};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use secrecy::ExposeSecret;
use std::sync::Arc;

type QueryParams = Vec<(&'static str, String)>;

/// HTTP implementation of [`SearchBackend`] against the IK API.
#[derive(Clone)]
pub struct IkApiClient {
    client: Client,
    settings: Arc<IkApiSettings>,
    store: Arc<dyn ResultStore>,
}

impl IkApiClient {
    pub fn new(
        settings: Arc<IkApiSettings>,
        store: Arc<dyn ResultStore>,
    ) -> Result<Self, BackendError> {
        let client = Client::builder()
            .user_agent(concat!("kanoon-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::info!(
            base_url = %settings.base_url,
            max_cites = settings.max_cites,
            max_cited_by = settings.max_cited_by,
            max_pages = settings.max_pages,
            num_workers = settings.num_workers,
            added_today = settings.added_today,
            "IK API client configured"
        );

        Ok(Self {
            client,
            settings,
            store,
        })
    }

    /// Check if the API token is set.
    pub fn is_configured(&self) -> bool {
        !self.settings.token.expose_secret().is_empty()
    }

    fn search_params(&self, query: &SearchQuery) -> QueryParams {
        let max_pages = query.max_pages.min(self.settings.max_pages);
        if max_pages < query.max_pages {
            tracing::debug!(
                requested = query.max_pages,
                allowed = max_pages,
                "Capping maxpages"
            );
        }

        let mut params = vec![
            ("formInput", query.query.clone()),
            ("pagenum", query.page_number.to_string()),
            ("maxpages", max_pages.to_string()),
        ];

        let from_date = if self.settings.added_today {
            Some(chrono::Local::now().format(IK_DATE_FORMAT).to_string())
        } else {
            self.settings.from_date.clone()
        };
        if let Some(from_date) = from_date {
            params.push(("fromdate", from_date));
        }
        if let Some(to_date) = &self.settings.to_date {
            params.push(("todate", to_date.clone()));
        }
        if let Some(sort_by) = &self.settings.sort_by {
            params.push(("sortby", sort_by.clone()));
        }

        params
    }

    fn citation_params(&self) -> QueryParams {
        let mut params = Vec::new();
        if self.settings.max_cites > 0 {
            params.push(("maxcites", self.settings.max_cites.to_string()));
        }
        if self.settings.max_cited_by > 0 {
            params.push(("maxcitedby", self.settings.max_cited_by.to_string()));
        }
        params
    }

    async fn call_api(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<Option<String>, BackendError> {
        if !self.is_configured() {
            return Err(BackendError::NotConfigured);
        }

        let url = format!("{}{}", self.settings.base_url.trim_end_matches('/'), path);

        let response = self
            .client
            .post(&url)
            .header(
                AUTHORIZATION,
                format!("Token {}", self.settings.token.expose_secret()),
            )
            .header(ACCEPT, "application/json")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, path, bytes = body.len(), "IK API response");

        if !status.is_success() {
            tracing::warn!(status = %status, path, body = %body, "IK API returned an error status");
            return Ok(None);
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(body))
    }
}

#[async_trait]
impl SearchBackend for IkApiClient {
    async fn search(&self, query: &SearchQuery) -> Result<Option<String>, BackendError> {
        let params = self.search_params(query);
        let results = self.call_api("/search/", &params).await?;

        if let Some(body) = &results {
            let path = self.store.json_path(&query.query);
            self.store.save_json(body, &path).await;
        }

        Ok(results)
    }

    async fn fetch_doc(&self, doc_id: DocId) -> Result<Option<String>, BackendError> {
        self.call_api(&format!("/doc/{}/", doc_id), &self.citation_params())
            .await
    }

    async fn fetch_doc_meta(&self, doc_id: DocId) -> Result<Option<String>, BackendError> {
        self.call_api(&format!("/docmeta/{}/", doc_id), &self.citation_params())
            .await
    }

    async fn fetch_doc_fragment(
        &self,
        doc_id: DocId,
        form_input: &str,
    ) -> Result<Option<String>, BackendError> {
        let params = vec![("formInput", form_input.to_string())];
        self.call_api(&format!("/docfragment/{}/", doc_id), &params)
            .await
    }
}
