//! Monitoring Logic
//!
//! ## Structure
//! - `classifier`: keyword verdicts for URLs
//! - `threat_log`: bounded newest-first threat record
//! - `simulator`: fabricated processes and connections
//! - `simulation_loop`: periodic background task driving the store
//! - `notifier`: fire-and-forget desktop alerts

pub mod classifier;
pub mod notifier;
pub mod simulation_loop;
pub mod simulator;
pub mod threat_log;

pub use classifier::{classify, Classification, ThreatType, Verdict};
pub use notifier::{Alert, DesktopNotifier, NoopNotifier, Notifier, NotifyError};
