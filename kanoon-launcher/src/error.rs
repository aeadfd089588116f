use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("{0} not found")]
    MissingExecutable(PathBuf),

    #[error("{0} is required but not set")]
    MissingEnv(String),

    #[error("Failed to install dependencies: {0}")]
    Install(String),

    #[error("Failed to start server: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Server health check failed: {reason}")]
    HealthCheckFailed { pid: Option<u32>, reason: String },

    #[error("Failed to stop server: {0}")]
    Stop(#[source] std::io::Error),
}
