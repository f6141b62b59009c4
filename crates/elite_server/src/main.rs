//! Elite Status gateway binary.

use anyhow::Context;
use clap::Parser;
use elite_config::ConfigProvider;
use elite_inara::connect;
use elite_server::{AppState, create_router};
use tracing::{info, warn};

/// Serve Inara data for Elite Dangerous commanders over HTTP.
#[derive(Debug, Parser)]
#[command(name = "elite-status", version, about)]
struct Cli {
    /// Address to bind
    #[arg(long, env = "ELITE_STATUS_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(long, env = "ELITE_STATUS_PORT", default_value_t = 8000)]
    port: u16,

    /// Answer from sample data instead of calling Inara
    #[arg(long, env = "INARA_USE_MOCK")]
    mock: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let provider = ConfigProvider::new();
    let configured = match provider.get() {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "Inara configuration unavailable");
            false
        }
    };

    let api = connect(cli.mock, &provider);
    let app = create_router(AppState::new(api, configured));

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, mock = cli.mock, "Serving Inara routes");
    axum::serve(listener, app).await?;
    Ok(())
}
