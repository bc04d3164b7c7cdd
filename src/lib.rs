//! One-Shield Demo Dashboard
//!
//! Browser-facing dashboard that simulates a security monitoring tool.
//! Metrics, processes, connections and threats are fabricated on a timer;
//! URL verdicts come from static keyword lists.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  SHIELD DASHBOARD                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌────────────┐        ┌──────────────────────────────┐  │
//! │  │  API       │        │  Simulation Loop             │  │
//! │  │  (Axum)    │        │  (tokio task, 2s period)     │  │
//! │  └─────┬──────┘        └──────────────┬───────────────┘  │
//! │        └──────────────┬───────────────┘                  │
//! │                       ▼                                  │
//! │              ┌─────────────────┐      ┌──────────────┐   │
//! │              │  State Store    │ ───▶ │  Notifier    │   │
//! │              │  (one Mutex)    │      │  (desktop)   │   │
//! │              └─────────────────┘      └──────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;
pub mod store;

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
    services::ServeDir,
};

pub use config::Config;
pub use error::{AppError, AppResult};
pub use store::StateStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StateStore>,
    pub config: Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/status", get(handlers::monitoring::status))
        .route("/api/start", post(handlers::monitoring::start))
        .route("/api/stop", post(handlers::monitoring::stop))
        .route("/api/check-url", post(handlers::urls::check_url))
        .route("/api/add-domain", post(handlers::domains::add))
        .route("/api/monitored-domains", get(handlers::domains::list))
        .route("/api/remove-domain", post(handlers::domains::remove));

    let page_routes = Router::new()
        .route("/", get(handlers::dashboard::index))
        .route("/health", get(handlers::health::check))
        .nest_service("/static", ServeDir::new(&state.config.static_dir));

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

/// Make sure the template and static asset folders exist
pub fn ensure_asset_dirs(config: &Config) -> std::io::Result<()> {
    for dir in [&config.templates_dir, &config.static_dir] {
        create_dir(dir)?;
    }
    Ok(())
}

fn create_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    tracing::debug!("Asset directory ready: {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_asset_dirs_creates_both() {
        let root = tempfile::tempdir().unwrap();
        let config = Config {
            templates_dir: root.path().join("templates"),
            static_dir: root.path().join("nested/static"),
            ..Config::default()
        };

        ensure_asset_dirs(&config).unwrap();
        // second call is a no-op
        ensure_asset_dirs(&config).unwrap();

        assert!(config.templates_dir.is_dir());
        assert!(config.static_dir.is_dir());
    }
}
