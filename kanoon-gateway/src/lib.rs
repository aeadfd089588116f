//! kanoon-gateway: HTTP gateway over the Indian Kanoon legal search API.
//!
//! | Method | Path | Backend operation |
//! |--------|------|-------------------|
//! | `GET`  | `/health` | – |
//! | `POST` | `/search` | [`SearchBackend::search`](services::SearchBackend::search) |
//! | `GET`  | `/doc/:doc_id` | [`SearchBackend::fetch_doc`](services::SearchBackend::fetch_doc) |
//! | `GET`  | `/docmeta/:doc_id` | [`SearchBackend::fetch_doc_meta`](services::SearchBackend::fetch_doc_meta) |
//! | `POST` | `/docfragment/:doc_id` | [`SearchBackend::fetch_doc_fragment`](services::SearchBackend::fetch_doc_fragment) |
//!
//! Errors are returned as `{"error": "..."}` with status 400 (missing field),
//! 404 (empty result) or 500 (unparseable upstream body or backend failure).

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;
