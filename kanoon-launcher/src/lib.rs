//! Process launcher for the kanoon gateway.
//!
//! The launcher checks that the gateway can run, optionally builds it,
//! spawns it, waits for it to warm up and probes `/health` once. A failed
//! probe kills the child before the error is returned.

pub mod config;
pub mod error;
pub mod process;

pub use config::{load_env_file, LaunchSettings, LauncherArgs};
pub use error::LaunchError;
pub use process::{check_dependencies, install_dependencies, start_gateway, GatewayProcess};
