use clap::Parser;
use smoke_tests::{run_smoke_tests, GatewayClient};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "smoke-test", version, about = "Smoke-test a running kanoon gateway")]
struct Args {
    /// Gateway base URL.
    #[arg(long, env = "KANOON_GATEWAY_URL", default_value = "http://localhost:5001")]
    base_url: String,

    /// Seconds to wait before the first request.
    #[arg(long, default_value_t = 2)]
    startup_delay_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    println!("kanoon gateway smoke test");
    println!("{}", "=".repeat(40));

    println!("Waiting for server to be ready...");
    tokio::time::sleep(Duration::from_secs(args.startup_delay_secs)).await;

    let client = GatewayClient::new(args.base_url);
    let report = run_smoke_tests(&client).await;

    println!(
        "\nTest Results: {}/{} tests passed",
        report.passed(),
        report.total()
    );

    if report.all_passed() {
        println!("✓ All tests passed! The API server is working correctly.");
        ExitCode::SUCCESS
    } else {
        println!("✗ Some tests failed. Please check the server logs.");
        ExitCode::FAILURE
    }
}
