//! Threat log entry model

use serde::{Deserialize, Serialize};

/// Severity tier of a logged threat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Category paired with each severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Info,
    Suspicious,
    Malicious,
}

impl Severity {
    /// Map a free-form level to its canonical severity/category pair.
    ///
    /// Matching is case-insensitive; unknown or empty levels become `low`/`info`.
    pub fn from_level(level: &str) -> (Severity, Category) {
        match level.to_lowercase().as_str() {
            "high" | "critical" | "malicious" => (Severity::High, Category::Malicious),
            "medium" | "suspicious" => (Severity::Medium, Category::Suspicious),
            _ => (Severity::Low, Category::Info),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threat {
    /// 8 lowercase alphanumeric characters
    pub id: String,
    pub severity: Severity,
    pub category: Category,
    pub description: String,
    /// Local wall clock, HH:MM:SS
    pub time: String,
}
