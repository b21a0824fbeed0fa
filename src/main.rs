//! Travel assistant CLI
//!
#![doc = "Travel assistant CLI"]
#![doc = "Main entry point for inspecting and invoking the travel tools."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use travel_assistant::cli::{Cli, Commands};
use travel_assistant::commands;
use travel_assistant::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    let output = match &cli.command {
        Commands::Tools => {
            tracing::debug!("Listing tool definitions");
            commands::tools::list_tools(&config)?
        }
        Commands::Manifest => {
            tracing::debug!("Rendering agent manifest");
            commands::manifest::show_manifest(&config)?
        }
        Commands::Call { tool, args } => {
            tracing::debug!("Calling tool {} with args {}", tool, args);
            commands::call::call_tool(&config, tool, args).await?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so stdout carries only JSON.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "travel_assistant=debug"
    } else {
        "travel_assistant=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
