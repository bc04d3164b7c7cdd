//! URL check handler

use axum::{extract::State, Json};

use crate::AppState;
use crate::logic::classifier::{classify, Verdict};
use crate::models::{CheckStatus, CheckUrlResponse, ThreatMatch, UrlRequest};

/// Classify a URL and log what was found.
///
/// An empty url is answered with `{"status": "ERROR"}` and a 200, matching
/// what the dashboard page expects.
pub async fn check_url(
    State(state): State<AppState>,
    Json(req): Json<UrlRequest>,
) -> Json<CheckUrlResponse> {
    let Some(url) = req.trimmed() else {
        return Json(CheckUrlResponse::status(CheckStatus::Error));
    };

    let result = classify(url);

    let response = match result.verdict {
        Verdict::ThreatDetected => {
            state
                .store
                .record_blocked_threat("high", &format!("AI blocked malicious website: {}", url));
            CheckUrlResponse {
                status: result.verdict.into(),
                threats: Some(result.threat_type.into_iter().map(|threat_type| ThreatMatch { threat_type }).collect()),
            }
        }
        Verdict::Suspicious => {
            state
                .store
                .add_threat("medium", &format!("AI flagged suspicious website: {}", url));
            CheckUrlResponse::status(result.verdict.into())
        }
        Verdict::Safe => CheckUrlResponse::status(result.verdict.into()),
    };

    tracing::debug!(url, keyword = ?result.keyword, "URL checked: {:?}", result.verdict);

    Json(response)
}
