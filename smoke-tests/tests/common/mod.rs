//! In-process gateway for exercising the smoke client.

#![allow(dead_code)]

use async_trait::async_trait;
use kanoon_gateway::config::{GatewayConfig, IkApiSettings, StorageSettings};
use kanoon_gateway::services::{BackendError, DocId, SearchBackend, SearchQuery};
use kanoon_gateway::startup::Application;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use smoke_tests::{wait_for_gateway, GatewayClient};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Backend with canned search results and a fixed set of known documents.
#[derive(Default)]
pub struct FakeIndex {
    pub search_body: Option<String>,
    pub documents: HashMap<DocId, String>,
}

impl FakeIndex {
    pub fn with_hits(tids: &[u64]) -> Self {
        let docs: Vec<String> = tids
            .iter()
            .map(|tid| format!(r#"{{"tid":{},"title":"Case {}"}}"#, tid, tid))
            .collect();
        Self {
            search_body: Some(format!(
                r#"{{"found":"1 - {} of {}","docs":[{}]}}"#,
                tids.len(),
                tids.len(),
                docs.join(",")
            )),
            documents: HashMap::new(),
        }
    }

    pub fn with_document(mut self, tid: DocId) -> Self {
        self.documents
            .insert(tid, format!(r#"{{"tid":{},"doc":"<p>judgment</p>"}}"#, tid));
        self
    }
}

#[async_trait]
impl SearchBackend for FakeIndex {
    async fn search(&self, _query: &SearchQuery) -> Result<Option<String>, BackendError> {
        Ok(self.search_body.clone())
    }

    async fn fetch_doc(&self, doc_id: DocId) -> Result<Option<String>, BackendError> {
        Ok(self.documents.get(&doc_id).cloned())
    }

    async fn fetch_doc_meta(&self, doc_id: DocId) -> Result<Option<String>, BackendError> {
        Ok(self.documents.get(&doc_id).map(|_| format!(r#"{{"tid":{}}}"#, doc_id)))
    }

    async fn fetch_doc_fragment(
        &self,
        doc_id: DocId,
        form_input: &str,
    ) -> Result<Option<String>, BackendError> {
        Ok(self
            .documents
            .get(&doc_id)
            .map(|_| format!(r#"{{"headline":["{}"]}}"#, form_input)))
    }
}

/// Starts a gateway over `index` and returns a client pointed at it.
pub async fn spawn_gateway(index: FakeIndex) -> GatewayClient {
    smoke_tests::init_tracing();

    let config = GatewayConfig {
        common: CoreConfig {
            port: 0,
            environment: "test".to_string(),
        },
        ikapi: IkApiSettings::new(Secret::new("test-token".to_string())),
        storage: StorageSettings::default(),
    };

    let app = Application::build(&config, Arc::new(index))
        .await
        .expect("Failed to build gateway");
    let client = GatewayClient::new(format!("http://127.0.0.1:{}", app.port()));

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    wait_for_gateway(&client, Duration::from_secs(5))
        .await
        .expect("Gateway did not become healthy");

    client
}
