//! Liveness check
//!
//! Also reports whether the simulation is running, so a health check can tell an
//! idle dashboard from a monitoring one without pulling the full snapshot.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    monitoring: bool,
    threats_logged: usize,
    timestamp: i64,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (monitoring, threats_logged) = state.store.health();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        monitoring,
        threats_logged,
        timestamp: chrono::Utc::now().timestamp(),
    })
}
