use async_trait::async_trait;
use service_core::error::AppError;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Where raw search results are dropped after a successful search.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Path the result for `query` is written to.
    fn json_path(&self, query: &str) -> PathBuf;

    /// Best-effort write; failures are logged and reported as `false`.
    async fn save_json(&self, content: &str, path: &Path) -> bool;
}

fn file_name_for(query: &str) -> String {
    let digest = Sha256::digest(query.as_bytes());
    format!("ikapi_{}.json", &hex::encode(digest)[..16])
}

/// Writes results as `ikapi_<hash>.json` files under a base directory.
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).await?;
        }
        Ok(Self { base_path })
    }
}

#[async_trait]
impl ResultStore for FileStore {
    fn json_path(&self, query: &str) -> PathBuf {
        self.base_path.join(file_name_for(query))
    }

    async fn save_json(&self, content: &str, path: &Path) -> bool {
        match fs::write(path, content).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), bytes = content.len(), "Saved search result");
                true
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Error saving JSON");
                false
            }
        }
    }
}

/// Store that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

#[async_trait]
impl ResultStore for NoopStore {
    fn json_path(&self, query: &str) -> PathBuf {
        PathBuf::from(file_name_for(query))
    }

    async fn save_json(&self, _content: &str, _path: &Path) -> bool {
        true
    }
}
