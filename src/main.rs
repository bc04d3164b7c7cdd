//! One-Shield Demo Dashboard Server

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shield_dashboard::logic::{simulation_loop, DesktopNotifier, NoopNotifier, Notifier};
use shield_dashboard::{create_router, ensure_asset_dirs, AppState, Config, StateStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "shield_dashboard=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Shield Dashboard starting...");

    ensure_asset_dirs(&config).context("Failed to create asset directories")?;

    let notifier: Arc<dyn Notifier> = if config.notifications_enabled {
        Arc::new(DesktopNotifier)
    } else {
        Arc::new(NoopNotifier)
    };
    tracing::info!("Notifier: {}", notifier.kind());

    let store = Arc::new(StateStore::new(notifier));

    // Background simulation runs for the process lifetime
    let _simulation = simulation_loop::start(store.clone(), config.simulation_interval);

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shield Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
