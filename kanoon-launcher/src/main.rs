use clap::Parser;
use kanoon_launcher::{
    check_dependencies, install_dependencies, load_env_file, start_gateway, LaunchError,
    LauncherArgs,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    load_env_file(None);
    let args = LauncherArgs::parse();

    println!("kanoon gateway startup");
    println!("{}", "=".repeat(40));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: LauncherArgs) -> Result<(), LaunchError> {
    let install = args.install;
    let settings = args.into_settings()?;

    match check_dependencies(&settings) {
        Err(LaunchError::MissingExecutable(path)) if install => {
            println!("✗ {} not found", path.display());
            println!("\nInstalling missing dependencies...");
            install_dependencies(&settings).await?;
            println!("✓ Dependencies installed successfully");
            check_dependencies(&settings)?;
        }
        Err(LaunchError::MissingExecutable(path)) => {
            println!("Build it with `cargo build -p kanoon-gateway` or pass --install");
            return Err(LaunchError::MissingExecutable(path));
        }
        other => other?,
    }
    println!("✓ {} is available", settings.program.display());

    println!("Starting kanoon gateway...");
    let mut process = start_gateway(&settings).await?;

    println!("✓ Server is running on {}", settings.base_url);
    println!("✓ Health check passed");
    println!("\nServer is ready!");
    println!("Press Ctrl+C to stop the server.");

    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    match process.wait_or_interrupt(interrupt).await? {
        Some(status) => println!("Server exited with {}", status),
        None => println!("\nServer stopped."),
    }

    Ok(())
}
