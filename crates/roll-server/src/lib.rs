//! HTTP server assembly for the attendance API.
//!
//! Wires the [`roll_api`] router together with the liveness route, CORS and
//! request tracing, and loads the [`ServerConfig`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{Router, routing::get};
use config::{Config, ConfigError};
use roll_core::store::AttendanceStore;
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

/// Plain-text body served at `GET /`.
pub const LIVENESS_MESSAGE: &str = "Attendance API is running";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, read once at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  /// SQLite connection string, e.g. `attendance.db` or `sqlite://data/roll.db`.
  pub database_url: String,
  /// Number of pooled database connections.
  pub pool_size:    usize,
}

/// Load configuration, lowest precedence first: built-in defaults, the
/// optional TOML file at `path`, `ROLL_*` environment variables, and finally
/// the conventional `DATABASE_URL` and `PORT` variables. Empty values count
/// as unset.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
  build_config(
    path.to_path_buf(),
    std::env::var("DATABASE_URL").ok(),
    std::env::var("PORT").ok(),
  )
}

fn build_config(
  path:         PathBuf,
  database_url: Option<String>,
  port:         Option<String>,
) -> Result<ServerConfig, ConfigError> {
  let database_url = database_url.filter(|v| !v.trim().is_empty());
  let port = port.filter(|v| !v.trim().is_empty());

  Config::builder()
    .set_default("host", "0.0.0.0")?
    .set_default("port", 5000)?
    .set_default("database_url", "attendance.db")?
    .set_default("pool_size", 4)?
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("ROLL").try_parsing(true))
    .set_override_option("database_url", database_url)?
    .set_override_option("port", port)?
    .build()?
    .try_deserialize()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application router for `store`.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: AttendanceStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(Any)
    .allow_headers(Any);

  Router::new()
    .route("/", get(|| async { LIVENESS_MESSAGE }))
    .merge(roll_api::api_router(store))
    .layer(cors)
    .layer(TraceLayer::new_for_http())
}

/// Resolve once Ctrl-C is received.
pub async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}
