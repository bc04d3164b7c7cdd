//! Dashboard state aggregate
//!
//! Serialized as-is by `GET /api/status`, so field names follow the
//! camelCase keys the dashboard page reads.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{Connection, Process, Threat};

/// Demo value reported for running models
pub const MODELS_RUNNING: u32 = 3;

/// Demo value reported for model accuracy
pub const MODEL_ACCURACY: f64 = 97.8;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub cpu_usage: u32,
    pub memory_usage: u32,
    pub network_activity: u32,
    pub process_count: u32,
    pub blocked_threats: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexAiStats {
    pub models_running: u32,
    pub predictions_today: u64,
    pub accuracy: f64,
}

impl Default for VertexAiStats {
    fn default() -> Self {
        Self {
            models_running: MODELS_RUNNING,
            predictions_today: 0,
            accuracy: MODEL_ACCURACY,
        }
    }
}

/// The single shared aggregate behind the store lock
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub monitoring: bool,
    pub system_stats: SystemStats,
    #[serde(rename = "vertexAIStats")]
    pub vertex_ai_stats: VertexAiStats,
    pub gemini_analysis: Option<String>,
    pub active_processes: Vec<Process>,
    pub network_connections: Vec<Connection>,
    /// Newest first
    pub threats: VecDeque<Threat>,
    /// Insertion order, no duplicates
    pub monitored_domains: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot_shape() {
        let value = serde_json::to_value(DashboardState::default()).unwrap();

        assert_eq!(value["monitoring"], false);
        assert_eq!(value["systemStats"]["cpuUsage"], 0);
        assert_eq!(value["systemStats"]["blockedThreats"], 0);
        assert_eq!(value["vertexAIStats"]["modelsRunning"], 3);
        assert_eq!(value["vertexAIStats"]["accuracy"], 97.8);
        assert!(value["geminiAnalysis"].is_null());
        assert_eq!(value["activeProcesses"], serde_json::json!([]));
        assert_eq!(value["networkConnections"], serde_json::json!([]));
        assert_eq!(value["threats"], serde_json::json!([]));
        assert_eq!(value["monitoredDomains"], serde_json::json!([]));
    }
}
