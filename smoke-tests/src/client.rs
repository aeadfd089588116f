//! Typed client for the gateway's HTTP surface.

use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::{json, Value};
use service_core::observability::{TracedClientExt, TracedRequest};
use std::time::Duration;

pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How many search hits `legal_advice` fetches details for.
const ADVICE_DETAIL_LIMIT: usize = 3;

/// Status and decoded body of a gateway response.
#[derive(Debug, Clone)]
pub struct GatewayReply {
    pub status: u16,
    pub body: Value,
}

impl GatewayReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The gateway's `error` message, if any.
    pub fn error(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }

    /// The `docs` array of a search reply.
    pub fn docs(&self) -> Option<&Vec<Value>> {
        self.body.get("docs").and_then(Value::as_array)
    }

    fn into_success(self) -> Result<Value> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(anyhow!(
                "API request failed: {} {}",
                self.status,
                self.error().unwrap_or("")
            ))
        }
    }
}

/// Search hits with details attached, as assembled by
/// [`GatewayClient::legal_advice`].
#[derive(Debug, Clone, Serialize)]
pub struct LegalAdvice {
    pub cases: Vec<Value>,
    /// The upstream `found` field as reported, e.g. `"1 - 10 of 11440"`.
    #[serde(rename = "totalFound")]
    pub total_found: Value,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Clone)]
pub struct GatewayClient {
    base_url: String,
    http: reqwest::Client,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(request: TracedRequest) -> Result<GatewayReply> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        Ok(GatewayReply { status, body })
    }

    pub async fn health(&self) -> Result<GatewayReply> {
        Self::send(
            self.http
                .traced_get(&self.url("/health"))
                .timeout(HEALTH_TIMEOUT),
        )
        .await
    }

    pub async fn search_cases(
        &self,
        query: &str,
        pagenum: u32,
        maxpages: u32,
    ) -> Result<GatewayReply> {
        let body = json!({ "query": query, "pagenum": pagenum, "maxpages": maxpages });
        Self::send(
            self.http
                .traced_post(&self.url("/search"))
                .json(&body)
                .timeout(REQUEST_TIMEOUT),
        )
        .await
    }

    pub async fn case_details(&self, doc_id: u64) -> Result<GatewayReply> {
        Self::send(
            self.http
                .traced_get(&self.url(&format!("/doc/{}", doc_id)))
                .timeout(REQUEST_TIMEOUT),
        )
        .await
    }

    pub async fn document_meta(&self, doc_id: u64) -> Result<GatewayReply> {
        Self::send(
            self.http
                .traced_get(&self.url(&format!("/docmeta/{}", doc_id)))
                .timeout(REQUEST_TIMEOUT),
        )
        .await
    }

    pub async fn document_fragment(&self, doc_id: u64, form_input: &str) -> Result<GatewayReply> {
        Self::send(
            self.http
                .traced_post(&self.url(&format!("/docfragment/{}", doc_id)))
                .json(&json!({ "formInput": form_input }))
                .timeout(REQUEST_TIMEOUT),
        )
        .await
    }

    /// Searches for `query` and attaches document details to the first few
    /// hits. Hits whose details cannot be fetched are left out.
    pub async fn legal_advice(&self, query: &str, context: Option<&str>) -> Result<LegalAdvice> {
        let results = self
            .search_cases(query, 0, 10)
            .await?
            .into_success()
            .map_err(|e| {
                tracing::warn!(error = %e, "Legal advice search failed");
                anyhow!(
                    "Unable to fetch legal information. Please check your query and try again."
                )
            })?;

        let total_found = results.get("found").cloned().unwrap_or(Value::Null);
        let hits = results
            .get("docs")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let mut cases = Vec::new();
        for hit in hits.into_iter().take(ADVICE_DETAIL_LIMIT) {
            let Some(doc_id) = doc_id_of(&hit) else {
                continue;
            };
            match self.case_details(doc_id).await {
                Ok(reply) if reply.is_success() => {
                    let mut case = hit;
                    if let Value::Object(fields) = &mut case {
                        fields.insert("details".to_string(), reply.body);
                    }
                    cases.push(case);
                }
                Ok(reply) => {
                    tracing::debug!(doc_id, status = reply.status, "Skipping case without details")
                }
                Err(e) => tracing::debug!(doc_id, error = %e, "Skipping case without details"),
            }
        }

        Ok(LegalAdvice {
            cases,
            total_found,
            query: query.to_string(),
            context: context.map(str::to_string),
        })
    }
}

/// Reads a hit's `tid`, which the upstream sends as a number.
pub fn doc_id_of(hit: &Value) -> Option<u64> {
    match hit.get("tid")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
