//! Request / response bodies for the JSON API

use serde::{Deserialize, Serialize};

use crate::logic::classifier::{ThreatType, Verdict};

/// Body of every endpoint that takes a URL.
///
/// A missing or null `url` is treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct UrlRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl UrlRequest {
    /// Trimmed url, `None` when empty
    pub fn trimmed(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Safe,
    Suspicious,
    ThreatDetected,
    Error,
}

impl From<Verdict> for CheckStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Safe => CheckStatus::Safe,
            Verdict::Suspicious => CheckStatus::Suspicious,
            Verdict::ThreatDetected => CheckStatus::ThreatDetected,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatMatch {
    pub threat_type: ThreatType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckUrlResponse {
    pub status: CheckStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threats: Option<Vec<ThreatMatch>>,
}

impl CheckUrlResponse {
    pub fn status(status: CheckStatus) -> Self {
        Self { status, threats: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDomainResponse {
    pub status: Verdict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainsResponse {
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_request_trimming() {
        let req: UrlRequest = serde_json::from_str(r#"{"url": "  a.com \n"}"#).unwrap();
        assert_eq!(req.trimmed(), Some("a.com"));

        let req: UrlRequest = serde_json::from_str(r#"{"url": "   "}"#).unwrap();
        assert_eq!(req.trimmed(), None);

        let req: UrlRequest = serde_json::from_str(r#"{"url": null}"#).unwrap();
        assert_eq!(req.trimmed(), None);

        let req: UrlRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.trimmed(), None);
    }

    #[test]
    fn test_verdict_maps_to_check_status() {
        assert_eq!(CheckStatus::from(Verdict::Safe), CheckStatus::Safe);
        assert_eq!(CheckStatus::from(Verdict::Suspicious), CheckStatus::Suspicious);
        assert_eq!(CheckStatus::from(Verdict::ThreatDetected), CheckStatus::ThreatDetected);

        let value = serde_json::to_value(CheckUrlResponse::status(Verdict::Suspicious.into())).unwrap();
        assert_eq!(value, serde_json::json!({"status": "SUSPICIOUS"}));
    }

    #[test]
    fn test_check_response_omits_empty_threats() {
        let value = serde_json::to_value(CheckUrlResponse::status(CheckStatus::Error)).unwrap();
        assert_eq!(value, serde_json::json!({"status": "ERROR"}));
    }
}
