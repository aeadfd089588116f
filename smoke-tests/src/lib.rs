//! Smoke tests for a running kanoon gateway.
//!
//! Provides a typed [`GatewayClient`] and the fixed check sequence
//! (health, search, document fetch) used by the `smoke-test` binary.
//!
//! ## Usage
//!
//! ```bash
//! # Start the gateway
//! cargo run -p kanoon-launcher
//!
//! # In another shell
//! cargo run -p smoke-tests --bin smoke-test -- --base-url http://localhost:5001
//! ```

pub mod checks;
pub mod client;

pub use checks::{run_smoke_tests, CheckOutcome, SmokeReport};
pub use client::{GatewayClient, GatewayReply, LegalAdvice};

use anyhow::{anyhow, Result};
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,smoke_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Polls the gateway health endpoint until it answers 200 OK.
pub async fn wait_for_gateway(client: &GatewayClient, timeout: Duration) -> Result<()> {
    let start = std::time::Instant::now();

    loop {
        let last_error = match client.health().await {
            Ok(reply) if reply.status == 200 => {
                tracing::info!("Gateway is healthy");
                return Ok(());
            }
            Ok(reply) => format!("status: {}", reply.status),
            Err(e) => format!("error: {}", e),
        };

        if start.elapsed() > timeout {
            return Err(anyhow!("Timeout waiting for gateway ({})", last_error));
        }

        tracing::debug!("Waiting for gateway: {}", last_error);
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
}
