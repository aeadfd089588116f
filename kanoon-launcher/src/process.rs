use crate::config::LaunchSettings;
use crate::error::LaunchError;
use service_core::observability::TracedClientExt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};

/// Verifies that the gateway executable resolves and the required
/// environment is present.
pub fn check_dependencies(settings: &LaunchSettings) -> Result<(), LaunchError> {
    if resolve_program(&settings.program).is_none() {
        tracing::warn!(program = %settings.program.display(), "Gateway executable not found");
        return Err(LaunchError::MissingExecutable(settings.program.clone()));
    }
    tracing::info!(program = %settings.program.display(), "Gateway executable found");

    for key in &settings.required_env {
        let set = std::env::var(key).map(|v| !v.is_empty()).unwrap_or(false)
            || settings.envs.iter().any(|(k, v)| k == key && !v.is_empty());
        if !set {
            return Err(LaunchError::MissingEnv(key.clone()));
        }
    }

    Ok(())
}

/// Looks `program` up the way the OS would: paths with a directory part are
/// taken as-is, bare names are searched on `PATH`.
fn resolve_program(program: &Path) -> Option<PathBuf> {
    if program.components().count() > 1 {
        return program.is_file().then(|| program.to_path_buf());
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

/// Runs the configured install command (a cargo build of the gateway).
pub async fn install_dependencies(settings: &LaunchSettings) -> Result<(), LaunchError> {
    let (program, args) = settings
        .install_command
        .split_first()
        .ok_or_else(|| LaunchError::Install("no install command configured".to_string()))?;

    tracing::info!(command = %settings.install_command.join(" "), "Installing dependencies");

    let status = Command::new(program)
        .args(args)
        .status()
        .await
        .map_err(|e| LaunchError::Install(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(LaunchError::Install(format!(
            "`{}` exited with {}",
            settings.install_command.join(" "),
            status
        )))
    }
}

/// Handle to a running gateway child process.
pub struct GatewayProcess {
    child: Child,
}

impl GatewayProcess {
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Waits for the child to exit on its own.
    pub async fn wait(&mut self) -> Result<ExitStatus, LaunchError> {
        self.child.wait().await.map_err(LaunchError::Stop)
    }

    /// Kills the child and reaps it.
    pub async fn terminate(&mut self) -> Result<ExitStatus, LaunchError> {
        if let Err(e) = self.child.start_kill() {
            // Already exited; waiting below still reaps it.
            tracing::debug!(error = %e, "Kill signal not delivered");
        }
        self.child.wait().await.map_err(LaunchError::Stop)
    }

    /// Waits for the child, terminating it if `interrupt` completes first.
    ///
    /// Returns `None` when the child was stopped by the interrupt.
    pub async fn wait_or_interrupt<F>(
        &mut self,
        interrupt: F,
    ) -> Result<Option<ExitStatus>, LaunchError>
    where
        F: Future,
    {
        tokio::select! {
            status = self.child.wait() => status.map(Some).map_err(LaunchError::Stop),
            _ = interrupt => {
                tracing::info!("Interrupt received, stopping server");
                self.terminate().await?;
                Ok(None)
            }
        }
    }
}

/// Spawns the gateway, waits for warm-up and probes its health endpoint once.
///
/// Any failure after the spawn terminates the child before returning.
pub async fn start_gateway(settings: &LaunchSettings) -> Result<GatewayProcess, LaunchError> {
    tracing::info!(program = %settings.program.display(), "Starting gateway");

    let child = Command::new(&settings.program)
        .args(&settings.args)
        .envs(settings.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(LaunchError::Spawn)?;

    let mut process = GatewayProcess { child };
    let pid = process.id();

    tokio::time::sleep(settings.warmup).await;

    match probe_health(settings).await {
        Ok(()) => {
            tracing::info!(pid = ?pid, url = %settings.base_url, "Gateway is healthy");
            Ok(process)
        }
        Err(reason) => {
            tracing::error!(pid = ?pid, reason = %reason, "Gateway health check failed");
            if let Err(e) = process.terminate().await {
                tracing::error!(error = %e, "Failed to stop unhealthy gateway");
            }
            Err(LaunchError::HealthCheckFailed { pid, reason })
        }
    }
}

async fn probe_health(settings: &LaunchSettings) -> Result<(), String> {
    let client = reqwest::Client::new();
    let response = client
        .traced_get(&settings.health_url())
        .timeout(settings.health_timeout)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(format!("status {}", status.as_u16()))
    }
}
