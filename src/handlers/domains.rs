//! Monitored domain handlers

use axum::{extract::State, Json};

use crate::{AppState, AppError, AppResult};
use crate::logic::classifier::{classify, Verdict};
use crate::models::{AddDomainResponse, DomainsResponse, OkResponse, UrlRequest};

/// Add a domain to the monitored list unless it classifies as malicious
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<UrlRequest>,
) -> AppResult<Json<AddDomainResponse>> {
    let url = req
        .trimmed()
        .ok_or_else(|| AppError::ValidationError("URL required".to_string()))?;

    let verdict = classify(url).verdict;

    if verdict == Verdict::ThreatDetected {
        state
            .store
            .record_blocked_threat("high", &format!("Blocked malicious domain: {}", url));
        return Ok(Json(AddDomainResponse { status: verdict }));
    }

    if state.store.add_domain(url) {
        tracing::info!("Monitoring domain: {}", url);
    }

    Ok(Json(AddDomainResponse { status: verdict }))
}

pub async fn list(State(state): State<AppState>) -> Json<DomainsResponse> {
    Json(DomainsResponse {
        domains: state.store.monitored_domains(),
    })
}

/// Remove a domain. Unknown domains are not an error.
pub async fn remove(
    State(state): State<AppState>,
    Json(req): Json<UrlRequest>,
) -> Json<OkResponse> {
    if let Some(url) = req.url.as_deref() {
        if state.store.remove_domain(url) {
            tracing::info!("Stopped monitoring domain: {}", url);
        }
    }
    Json(OkResponse::ok())
}
