//! Forum - command-line entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forum_service_lib::{cli::Cli, commands, config::ForumServiceConfig};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = ForumServiceConfig::from_env();
    if let Some(url) = cli.database_url.clone() {
        config = config.with_database_url(url);
    }

    init_tracing(cli.verbose, &config.service.log_level);
    tracing::debug!(?config, "Configuration loaded");

    if let Err(e) = run(cli, config).await {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: ForumServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output) = commands::execute_offline(&cli.command) {
        println!("{}", output);
        return Ok(());
    }

    let services = forum_service_lib::connect(&config).await?;
    let output = commands::execute(cli.command, &services).await?;
    println!("{}", output);

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, default_level: &str) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
