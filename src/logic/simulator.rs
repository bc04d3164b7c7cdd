//! Process / Connection Simulators
//!
//! Random generators for one fabricated process and one fabricated network
//! connection. The RNG is passed in so callers decide how it is seeded.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Connection, ConnectionStatus, Process};

// ============================================================================
// CATALOGUES
// ============================================================================

pub const LEGIT_PROCESSES: &[&str] = &[
    "chrome.exe", "explorer.exe", "node.exe", "python.exe", "code.exe",
];

pub const MALICIOUS_PROCESSES: &[&str] = &[
    "svch0st.exe", "winlogin32.exe", "sys_update.exe", "payload.exe",
];

pub const LEGIT_DOMAINS: &[&str] = &["google.com", "github.com", "cloudflare.com"];

pub const MALICIOUS_DOMAINS: &[&str] = &["c2-server.xyz", "malware-drop.ru", "phishing-login.net"];

pub const PORTS: &[u16] = &[80, 443, 8080];

/// A uniform draw above this picks a malicious process (~15%)
pub const MALICIOUS_PROCESS_CUTOFF: f64 = 0.85;

/// A uniform draw above this picks a malicious domain (~12%)
pub const MALICIOUS_CONNECTION_CUTOFF: f64 = 0.88;

pub const PID_RANGE: std::ops::RangeInclusive<u32> = 1000..=50000;

pub const MAX_PROCESS_CPU: f64 = 40.0;

// ============================================================================
// GENERATORS
// ============================================================================

pub fn generate_process<R: Rng + ?Sized>(rng: &mut R) -> Process {
    let is_bad = rng.gen::<f64>() > MALICIOUS_PROCESS_CUTOFF;
    let names = if is_bad { MALICIOUS_PROCESSES } else { LEGIT_PROCESSES };

    Process {
        name: pick(rng, names).to_string(),
        pid: rng.gen_range(PID_RANGE),
        cpu: round_one_decimal(rng.gen::<f64>() * MAX_PROCESS_CPU),
        is_suspicious: is_bad,
    }
}

pub fn generate_connection<R: Rng + ?Sized>(rng: &mut R) -> Connection {
    let is_bad = rng.gen::<f64>() > MALICIOUS_CONNECTION_CUTOFF;
    let domains = if is_bad { MALICIOUS_DOMAINS } else { LEGIT_DOMAINS };
    let domain = pick(rng, domains).to_string();

    let ip = (0..4)
        .map(|_| rng.gen_range(1..=254u8).to_string())
        .collect::<Vec<_>>()
        .join(".");

    Connection {
        domain,
        ip,
        port: *PORTS.choose(rng).unwrap_or(&443),
        status: if is_bad { ConnectionStatus::Blocked } else { ConnectionStatus::Allowed },
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ============================================================================
// TESTS
// ============================================================================
