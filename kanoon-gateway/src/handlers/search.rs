use super::{json_body, json_payload, required};
use crate::dtos::SearchRequest;
use crate::services::SearchQuery;
use crate::startup::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use service_core::error::AppError;

pub async fn search_cases(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = json_body(body)?;

    let page_number = request.page_number();
    let max_pages = request.max_pages();
    let query = required(request.query, "Query is required")?;

    tracing::info!(query = %query, page = page_number, max_pages, "Searching");

    let search = SearchQuery::new(query, page_number, max_pages);
    let outcome = state.backend.search(&search).await;

    json_payload("search", outcome, "No results found")
}
