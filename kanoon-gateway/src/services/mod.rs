//! Upstream search backend, its HTTP implementation and the result store.

pub mod backend;
pub mod ikapi;
pub mod storage;

pub use backend::{BackendError, DocId, SearchBackend, SearchQuery};
pub use ikapi::IkApiClient;
pub use storage::{FileStore, NoopStore, ResultStore};
