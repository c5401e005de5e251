//! feedback-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus the
//! environment, opens the SQLite letter store, and serves the form over HTTP.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use feedback_core::{catalog::Catalog, fixture::FixtureStore};
use feedback_store_sqlite::SqliteStore;
use feedback_web::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Parent feedback letter server")]
struct Cli {
  /// Path to the TOML configuration file.
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

  let server_cfg = ServerConfig::load(Some(cli.config.as_path()))
    .context("failed to load ServerConfig")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  let sqlite = SqliteStore::open(&store_path, server_cfg.project.clone())
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let catalog = Arc::new(Catalog::district());
  let store   = FixtureStore::with_demo(sqlite, &catalog);
  let state   = AppState::new(store, catalog, server_cfg.clone());

  let app = feedback_web::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!(project = %server_cfg.project, store = ?store_path, "Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
