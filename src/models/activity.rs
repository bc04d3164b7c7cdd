//! Synthetic process and connection models

use serde::{Deserialize, Serialize};

/// One fabricated process entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub name: String,
    /// 1000..=50000
    pub pid: u32,
    /// 0.0..=40.0, one decimal
    pub cpu: f64,
    pub is_suspicious: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Allowed,
    Blocked,
}

/// One fabricated network connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub domain: String,
    /// Dotted quad, every octet in 1..=254
    pub ip: String,
    pub port: u16,
    pub status: ConnectionStatus,
}

impl Connection {
    pub fn is_blocked(&self) -> bool {
        self.status == ConnectionStatus::Blocked
    }
}
