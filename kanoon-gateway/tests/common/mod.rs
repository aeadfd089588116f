#![allow(dead_code)]

use async_trait::async_trait;
use kanoon_gateway::config::{GatewayConfig, IkApiSettings, StorageSettings};
use kanoon_gateway::services::{BackendError, DocId, SearchBackend, SearchQuery};
use kanoon_gateway::startup::Application;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::{Arc, Mutex};

/// What the stub hands back for an operation.
#[derive(Clone, Debug)]
pub enum Reply {
    Json(String),
    Empty,
    Fail,
}

impl Reply {
    pub fn json(body: &str) -> Self {
        Reply::Json(body.to_string())
    }

    fn outcome(&self) -> Result<Option<String>, BackendError> {
        match self {
            Reply::Json(body) => Ok(Some(body.clone())),
            Reply::Empty => Ok(None),
            Reply::Fail => Err(BackendError::NotConfigured),
        }
    }
}

/// Backend double that replies the same way to every operation and
/// records what it was asked.
pub struct StubBackend {
    reply: Reply,
    pub searches: Mutex<Vec<SearchQuery>>,
    pub fetches: Mutex<Vec<(&'static str, DocId, Option<String>)>>,
}

impl StubBackend {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            searches: Mutex::new(Vec::new()),
            fetches: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SearchBackend for StubBackend {
    async fn search(&self, query: &SearchQuery) -> Result<Option<String>, BackendError> {
        self.searches.lock().unwrap().push(query.clone());
        self.reply.outcome()
    }

    async fn fetch_doc(&self, doc_id: DocId) -> Result<Option<String>, BackendError> {
        self.fetches.lock().unwrap().push(("doc", doc_id, None));
        self.reply.outcome()
    }

    async fn fetch_doc_meta(&self, doc_id: DocId) -> Result<Option<String>, BackendError> {
        self.fetches.lock().unwrap().push(("docmeta", doc_id, None));
        self.reply.outcome()
    }

    async fn fetch_doc_fragment(
        &self,
        doc_id: DocId,
        form_input: &str,
    ) -> Result<Option<String>, BackendError> {
        self.fetches
            .lock()
            .unwrap()
            .push(("docfragment", doc_id, Some(form_input.to_string())));
        self.reply.outcome()
    }
}

pub fn test_config() -> GatewayConfig {
    GatewayConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            environment: "test".to_string(),
        },
        ikapi: IkApiSettings::new(Secret::new("test-token".to_string())),
        storage: StorageSettings::default(),
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn(backend: Arc<dyn SearchBackend>) -> Self {
        let app = Application::build(&test_config(), backend)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to answer before handing it out
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}
