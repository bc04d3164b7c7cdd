//! Monitoring status and on/off switch

use axum::{extract::State, Json};

use crate::AppState;
use crate::models::{DashboardState, OkResponse};

/// Full state snapshot
pub async fn status(State(state): State<AppState>) -> Json<DashboardState> {
    Json(state.store.snapshot())
}

pub async fn start(State(state): State<AppState>) -> Json<OkResponse> {
    state.store.set_monitoring(true);
    Json(OkResponse::ok())
}

pub async fn stop(State(state): State<AppState>) -> Json<OkResponse> {
    state.store.set_monitoring(false);
    Json(OkResponse::ok())
}
