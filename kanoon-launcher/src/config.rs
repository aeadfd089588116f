use crate::error::LaunchError;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const GATEWAY_PACKAGE: &str = "kanoon-gateway";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "kanoon-launcher",
    version,
    about = "Start the kanoon gateway and keep it running until Ctrl+C"
)]
pub struct LauncherArgs {
    /// Gateway executable. Defaults to `kanoon-gateway` next to this binary.
    #[arg(long, env = "KANOON_GATEWAY_BIN")]
    pub gateway_bin: Option<PathBuf>,

    /// Port the gateway listens on.
    #[arg(long, env = "PORT", default_value_t = 5001)]
    pub port: u16,

    /// Seconds to wait after spawning before probing health.
    #[arg(long, default_value_t = 3)]
    pub warmup_secs: u64,

    /// Timeout for the health probe, in seconds.
    #[arg(long, default_value_t = 5)]
    pub health_timeout_secs: u64,

    /// Build the gateway with cargo when the executable is missing.
    #[arg(long)]
    pub install: bool,
}

/// Everything needed to run one launch.
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
    /// Variables that must be set before spawning.
    pub required_env: Vec<String>,
    pub base_url: String,
    pub warmup: Duration,
    pub health_timeout: Duration,
    /// Command used by `--install`.
    pub install_command: Vec<String>,
}

impl LaunchSettings {
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url.trim_end_matches('/'))
    }
}

impl LauncherArgs {
    pub fn into_settings(self) -> Result<LaunchSettings, LaunchError> {
        let program = match self.gateway_bin {
            Some(path) => path,
            None => default_gateway_bin().map_err(LaunchError::Spawn)?,
        };

        Ok(LaunchSettings {
            program,
            args: Vec::new(),
            envs: vec![("PORT".to_string(), self.port.to_string())],
            required_env: vec!["IKAPI_TOKEN".to_string()],
            base_url: format!("http://localhost:{}", self.port),
            warmup: Duration::from_secs(self.warmup_secs),
            health_timeout: Duration::from_secs(self.health_timeout_secs),
            install_command: install_command(!cfg!(debug_assertions)),
        })
    }
}

/// Loads `.env` into the process environment, as the gateway does on
/// startup. `path` overrides the usual lookup from the working directory.
pub fn load_env_file(path: Option<&Path>) {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match loaded {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded environment file"),
        Err(e) => tracing::debug!(error = %e, "No environment file loaded"),
    }
}

/// Cargo build of the gateway into the same profile directory the launcher
/// runs from, so the default executable path finds the result.
fn install_command(release: bool) -> Vec<String> {
    let mut command = vec!["cargo".to_string(), "build".to_string()];
    if release {
        command.push("--release".to_string());
    }
    command.extend(["-p".to_string(), GATEWAY_PACKAGE.to_string()]);
    command
}

fn default_gateway_bin() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.with_file_name(format!(
        "{}{}",
        GATEWAY_PACKAGE,
        std::env::consts::EXE_SUFFIX
    )))
}
