//! HTTP server for the Audit Calculation Engine.
//!
//! Loads a rule profile (or the built-in standard rules) and serves the
//! audit API.

use std::path::PathBuf;

use audit_engine::api::{AppState, create_router};
use audit_engine::config::ConfigLoader;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "audit-engine", version, about = "Audit calculation engine HTTP server")]
struct Cli {
    /// Rule profile directory containing profile.yaml, tax_slabs.yaml and thresholds.yaml.
    #[arg(long, env = "AUDIT_ENGINE_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, env = "AUDIT_ENGINE_BIND", default_value = "127.0.0.1:3000")]
    bind: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config_dir {
        Some(dir) => ConfigLoader::load(dir)?,
        None => {
            info!("No rule profile directory given, using built-in standard rules");
            ConfigLoader::standard()
        }
    };
    info!(
        profile = %config.profile().code,
        version = %config.profile().version,
        "Rule profile ready"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    info!(address = %listener.local_addr()?, "Audit engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
