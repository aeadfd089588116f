use super::{doc_id, json_body, json_payload, required};
use crate::dtos::FragmentRequest;
use crate::startup::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use service_core::error::AppError;

pub async fn get_document(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let doc_id = doc_id(path)?;
    tracing::info!(doc_id, "Fetching document");

    let outcome = state.backend.fetch_doc(doc_id).await;
    json_payload("fetch_doc", outcome, "Document not found")
}

pub async fn get_document_meta(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let doc_id = doc_id(path)?;
    tracing::info!(doc_id, "Fetching document metadata");

    let outcome = state.backend.fetch_doc_meta(doc_id).await;
    json_payload("fetch_doc_meta", outcome, "Document metadata not found")
}

pub async fn get_document_fragment(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<FragmentRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let doc_id = doc_id(path)?;
    let request = json_body(body)?;

    let form_input = required(request.form_input, "formInput is required")?;

    tracing::info!(doc_id, query = %form_input, "Fetching document fragment");

    let outcome = state.backend.fetch_doc_fragment(doc_id, &form_input).await;
    json_payload("fetch_doc_fragment", outcome, "Document fragment not found")
}
