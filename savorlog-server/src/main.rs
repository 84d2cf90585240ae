//! savorlog-server - Recipe notebook and weekly meal planner
//!
//! Serves the JSON REST API under /api and the embedded web client at /.
//! A failed startup database connection is fatal; per-request store
//! failures are logged and the process keeps serving.

use anyhow::Result;
use clap::Parser;
use savorlog_common::config::{describe_database, ServerConfig};
use savorlog_common::db::init_database;
use savorlog_server::{build_router, AppState};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "savorlog-server", about = "SavorLog recipe notebook and meal planner")]
struct Cli {
    /// Listening port (falls back to SAVORLOG_PORT, config file, then 5000)
    #[arg(long)]
    port: Option<u16>,

    /// SQLite database path (falls back to SAVORLOG_DB, config file, then
    /// the platform data directory)
    #[arg(long, value_name = "PATH")]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting SavorLog server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = ServerConfig::resolve(cli.port, cli.database);
    config.ensure_database_dir()?;
    info!("Database: {}", describe_database(&config.database_path));

    let pool = match init_database(&config.database_path).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            // No degraded mode: an unreachable store is fatal
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("SavorLog listening on http://127.0.0.1:{}", config.port);
    info!("Web client: http://127.0.0.1:{}/", config.port);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
