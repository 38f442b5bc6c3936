//! roll-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) plus the
//! environment, opens the SQLite connection pool, and serves the attendance
//! API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use roll_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Attendance tracking REST server")]
struct Cli {
  /// Path to the optional TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = roll_server::load_config(&cli.config)
    .context("failed to load configuration")?;

  // Open the connection pool; it lives for the whole process.
  let store = SqliteStore::connect(&server_cfg.database_url, server_cfg.pool_size)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.database_url))?;

  let app = roll_server::app(Arc::new(store));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(roll_server::shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}
