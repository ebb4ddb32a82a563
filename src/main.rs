use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// A small web application that lists food vendors and serves each vendor's
/// menu out of a pre-existing SQLite store.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings = configuration::load_settings(&cli.config)?;
    tracing::info!(config = %cli.config.display(), "Configuration loaded");

    // Exactly one startup invocation; run_server blocks until shutdown.
    web_server::run_server(settings).await
}
