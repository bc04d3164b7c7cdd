//! Dashboard page
//!
//! Serves `<templates>/index.html` when present, otherwise the page
//! embedded in the binary.

use axum::{extract::State, response::Html};

use crate::AppState;

/// Embedded dashboard HTML
const DASHBOARD_HTML: &str = include_str!("../ui/dashboard.html");

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let path = state.config.templates_dir.join("index.html");

    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page),
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read {}: {} - using embedded page", path.display(), e);
            }
            Html(DASHBOARD_HTML.to_string())
        }
    }
}
