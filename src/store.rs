//! State Store
//!
//! Owns the single `DashboardState` behind one coarse lock. Every request
//! and every simulation tick is one short critical section; nothing awaits
//! while holding the guard. Alerts are dispatched after the guard drops.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::Rng;

use crate::logic::notifier::{self, Alert, Notifier};
use crate::logic::{simulator, threat_log};
use crate::models::{Connection, DashboardState, Process, Threat};

/// Canned analysis lines rotated into `geminiAnalysis`
pub const ANALYSIS_MESSAGES: &[&str] = &[
    "Behavioral analysis complete – no anomalies",
    "AI detected suspicious traffic pattern",
    "Zero-day exploit behavior simulated",
    "Threat intelligence updated successfully",
];

/// A uniform draw above this replaces the analysis message (~30%)
const ANALYSIS_CUTOFF: f64 = 0.7;

/// Outcome of one simulation tick
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// false when monitoring was off and nothing was touched
    pub active: bool,
    pub process: Option<Process>,
    pub connection: Option<Connection>,
    /// Threats blocked during this tick
    pub blocked: u32,
}

pub struct StateStore {
    inner: Mutex<DashboardState>,
    notifier: Arc<dyn Notifier>,
}

impl StateStore {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            inner: Mutex::new(DashboardState::default()),
            notifier,
        }
    }

    /// Full copy of the current state
    pub fn snapshot(&self) -> DashboardState {
        self.inner.lock().clone()
    }

    pub fn is_monitoring(&self) -> bool {
        self.inner.lock().monitoring
    }

    /// Monitoring flag and threat-log length, read under one lock
    pub fn health(&self) -> (bool, usize) {
        let state = self.inner.lock();
        (state.monitoring, state.threats.len())
    }

    pub fn set_monitoring(&self, enabled: bool) {
        let previous = std::mem::replace(&mut self.inner.lock().monitoring, enabled);
        if previous != enabled {
            tracing::info!("Monitoring {}", if enabled { "started" } else { "stopped" });
        }
    }

    // ========================================================================
    // THREAT LOG
    // ========================================================================

    /// Log a threat; high severity also raises a desktop alert
    pub fn add_threat(&self, level: &str, description: &str) -> Threat {
        self.add_threat_with(level, description, &mut rand::thread_rng())
    }

    pub fn add_threat_with<R: Rng + ?Sized>(
        &self,
        level: &str,
        description: &str,
        rng: &mut R,
    ) -> Threat {
        let (threat, alert) = {
            let mut state = self.inner.lock();
            threat_log::add_threat(&mut state.threats, level, description, rng)
        };
        self.send_alert(alert);
        threat
    }

    /// Log a threat and count it as blocked in one transaction
    pub fn record_blocked_threat(&self, level: &str, description: &str) -> Threat {
        self.record_blocked_threat_with(level, description, &mut rand::thread_rng())
    }

    pub fn record_blocked_threat_with<R: Rng + ?Sized>(
        &self,
        level: &str,
        description: &str,
        rng: &mut R,
    ) -> Threat {
        let (threat, alert) = {
            let mut state = self.inner.lock();
            let logged = threat_log::add_threat(&mut state.threats, level, description, rng);
            state.system_stats.blocked_threats += 1;
            logged
        };
        tracing::warn!("Blocked ({}): {}", threat.severity, description);
        self.send_alert(alert);
        threat
    }

    // ========================================================================
    // MONITORED DOMAINS
    // ========================================================================

    /// Append `url` unless already present. Returns true when inserted.
    pub fn add_domain(&self, url: &str) -> bool {
        let mut state = self.inner.lock();
        if state.monitored_domains.iter().any(|d| d == url) {
            return false;
        }
        state.monitored_domains.push(url.to_string());
        true
    }

    /// Remove `url` if present. Returns true when something was removed.
    pub fn remove_domain(&self, url: &str) -> bool {
        let mut state = self.inner.lock();
        let before = state.monitored_domains.len();
        state.monitored_domains.retain(|d| d != url);
        state.monitored_domains.len() != before
    }

    pub fn monitored_domains(&self) -> Vec<String> {
        self.inner.lock().monitored_domains.clone()
    }

    // ========================================================================
    // SIMULATION
    // ========================================================================

    /// Run one simulation step. A no-op while monitoring is off.
    pub fn tick<R: Rng + ?Sized>(&self, rng: &mut R) -> TickReport {
        let mut alerts = Vec::new();

        let report = {
            let mut state = self.inner.lock();
            if !state.monitoring {
                return TickReport::default();
            }

            state.system_stats.cpu_usage = rng.gen_range(10..=95);
            state.system_stats.memory_usage = rng.gen_range(10..=95);
            state.system_stats.process_count = rng.gen_range(120..=220);

            let mut blocked = 0;

            let process = simulator::generate_process(rng);
            if process.is_suspicious {
                let description = format!("Suspicious process blocked: {}", process.name);
                let (threat, alert) = threat_log::add_threat(&mut state.threats, "medium", &description, rng);
                tracing::warn!("Blocked ({}): {}", threat.severity, description);
                alerts.extend(alert);
                state.system_stats.blocked_threats += 1;
                blocked += 1;
            }
            state.active_processes = vec![process.clone()];

            let connection = simulator::generate_connection(rng);
            if connection.is_blocked() {
                let description = format!("Malicious connection blocked: {}", connection.domain);
                let (threat, alert) = threat_log::add_threat(&mut state.threats, "high", &description, rng);
                tracing::warn!("Blocked ({}): {}", threat.severity, description);
                alerts.extend(alert);
                state.system_stats.blocked_threats += 1;
                blocked += 1;
            }
            state.network_connections = vec![connection.clone()];

            if rng.gen::<f64>() > ANALYSIS_CUTOFF {
                let idx = rng.gen_range(0..ANALYSIS_MESSAGES.len());
                state.gemini_analysis = Some(ANALYSIS_MESSAGES[idx].to_string());
            }

            state.vertex_ai_stats.predictions_today += rng.gen_range(10..=40u64);

            TickReport {
                active: true,
                process: Some(process),
                connection: Some(connection),
                blocked,
            }
        };

        for alert in alerts {
            self.send_alert(Some(alert));
        }

        report
    }

    fn send_alert(&self, alert: Option<Alert>) {
        if let Some(alert) = alert {
            notifier::dispatch(self.notifier.as_ref(), &alert);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
