pub mod documents;
pub mod health;
pub mod search;

pub use documents::{get_document, get_document_fragment, get_document_meta};
pub use health::health_check;
pub use search::search_cases;

use crate::services::BackendError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use service_core::error::AppError;

/// Turns a backend outcome into the gateway response.
///
/// Empty results become 404 with `not_found`, bodies that are not JSON become
/// 500, backend failures become 500 carrying the failure message.
pub(crate) fn json_payload(
    operation: &'static str,
    outcome: Result<Option<String>, BackendError>,
    not_found: &str,
) -> Result<Json<Value>, AppError> {
    let raw = match outcome {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => {
            tracing::info!(operation, "{}", not_found);
            return Err(AppError::not_found(not_found));
        }
        Err(e) => {
            tracing::error!(operation, error = %e, "Backend call failed");
            return Err(AppError::InternalError(anyhow::Error::new(e)));
        }
    };

    serde_json::from_str(&raw).map(Json).map_err(|e| {
        tracing::error!(operation, error = %e, "Error parsing JSON response");
        AppError::internal("Invalid response format")
    })
}

/// Unwraps a JSON body, reporting malformed or missing bodies as 400.
pub(crate) fn json_body<T: DeserializeOwned>(
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected request body");
        AppError::bad_request(rejection.body_text())
    })
}

/// Extracts a positive document id from the path.
pub(crate) fn doc_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, AppError> {
    match path {
        Ok(Path(id)) if id > 0 => Ok(id),
        Ok(Path(id)) => Err(reject(&format!("document id {}", id), DOC_ID_MESSAGE)),
        Err(rejection) => Err(reject(&rejection.body_text(), DOC_ID_MESSAGE)),
    }
}

const DOC_ID_MESSAGE: &str = "Document id must be a positive integer";

/// Keeps the value only when it is present and not blank; otherwise the
/// request is rejected with `message`.
pub(crate) fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| reject("missing or blank field", message))
}

fn reject(cause: &str, message: &str) -> AppError {
    tracing::warn!(cause, "{}", message);
    AppError::bad_request(message)
}
