//! URL Classifier
//!
//! Keyword-based verdict for a URL string. Pure function, no state.
//! Critical keywords are checked before suspicious ones; within a tier the
//! list order decides which keyword is reported.

use serde::{Deserialize, Serialize};

// ============================================================================
// KEYWORD RULES
// ============================================================================

/// Any of these => THREAT_DETECTED / MALWARE
pub const CRITICAL_KEYWORDS: &[&str] = &[
    "malware", "trojan", "ransom", "virus",
    "phishing", "keylogger", "c2", "exploit",
    "payload", "stealer", "botnet",
];

/// Any of these => SUSPICIOUS / LOW_REPUTATION_DOMAIN
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "free", "login", "verify", "update",
    "secure", "bonus", "unknown", "redirect",
];

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Safe,
    Suspicious,
    ThreatDetected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatType {
    Malware,
    LowReputationDomain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    pub threat_type: Option<ThreatType>,
    /// Keyword that decided the verdict, if any
    pub keyword: Option<&'static str>,
}

impl Classification {
    fn safe() -> Self {
        Self { verdict: Verdict::Safe, threat_type: None, keyword: None }
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Classify a URL by substring match against the keyword lists.
///
/// Total and deterministic. Empty input is the caller's problem and simply
/// comes back `SAFE`.
pub fn classify(url: &str) -> Classification {
    let url = url.to_lowercase();

    if let Some(keyword) = first_match(&url, CRITICAL_KEYWORDS) {
        return Classification {
            verdict: Verdict::ThreatDetected,
            threat_type: Some(ThreatType::Malware),
            keyword: Some(keyword),
        };
    }

    if let Some(keyword) = first_match(&url, SUSPICIOUS_KEYWORDS) {
        return Classification {
            verdict: Verdict::Suspicious,
            threat_type: Some(ThreatType::LowReputationDomain),
            keyword: Some(keyword),
        };
    }

    Classification::safe()
}

fn first_match(haystack: &str, keywords: &[&'static str]) -> Option<&'static str> {
    keywords.iter().copied().find(|k| haystack.contains(k))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malware_detected() {
        let result = classify("this site has malware");
        assert_eq!(result.verdict, Verdict::ThreatDetected);
        assert_eq!(result.threat_type, Some(ThreatType::Malware));
        assert_eq!(result.keyword, Some("malware"));
    }

    #[test]
    fn test_suspicious_first_keyword_wins() {
        let result = classify("please login to verify");
        assert_eq!(result.verdict, Verdict::Suspicious);
        assert_eq!(result.threat_type, Some(ThreatType::LowReputationDomain));
        // "free" is absent, "login" precedes "verify" in the list
        assert_eq!(result.keyword, Some("login"));
    }

    #[test]
    fn test_safe_domain() {
        let result = classify("example.com");
        assert_eq!(result.verdict, Verdict::Safe);
        assert_eq!(result.threat_type, None);
        assert_eq!(result.keyword, None);
    }

    #[test]
    fn test_critical_beats_suspicious() {
        let result = classify("free-login.phishing.example");
        assert_eq!(result.verdict, Verdict::ThreatDetected);
        assert_eq!(result.keyword, Some("phishing"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("HTTP://TROJAN.EXAMPLE").verdict, Verdict::ThreatDetected);
        assert_eq!(classify("Secure-Bank.example").verdict, Verdict::Suspicious);
    }

    #[test]
    fn test_list_order_breaks_ties() {
        // both "virus" and "malware" appear; "malware" comes first in the list
        assert_eq!(classify("virus-and-malware.biz").keyword, Some("malware"));
    }

    #[test]
    fn test_substring_matching() {
        // "c2" hides inside unrelated words too; that is the documented behavior
        assert_eq!(classify("abc2def.org").verdict, Verdict::ThreatDetected);
    }

    #[test]
    fn test_verdict_wire_names() {
        assert_eq!(serde_json::to_value(Verdict::ThreatDetected).unwrap(), "THREAT_DETECTED");
        assert_eq!(serde_json::to_value(Verdict::Safe).unwrap(), "SAFE");
        assert_eq!(
            serde_json::to_value(ThreatType::LowReputationDomain).unwrap(),
            "LOW_REPUTATION_DOMAIN"
        );
    }
}
