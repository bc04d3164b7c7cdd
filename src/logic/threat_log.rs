//! Threat Log
//!
//! Bounded newest-first record of detected events. Appending is infallible;
//! the matching desktop alert is returned to the caller so it can be sent
//! once the state lock is released.

use std::collections::VecDeque;

use chrono::Local;
use rand::Rng;

use crate::logic::notifier::Alert;
use crate::models::{Severity, Threat};

/// Oldest entries beyond this are dropped
pub const MAX_THREATS: usize = 30;

const ID_LEN: usize = 8;
const ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Build a threat for `level`, prepend it to `log` and cap the log.
///
/// Returns the stored threat and, for high severity, the alert to dispatch.
pub fn add_threat<R: Rng + ?Sized>(
    log: &mut VecDeque<Threat>,
    level: &str,
    description: &str,
    rng: &mut R,
) -> (Threat, Option<Alert>) {
    let (severity, category) = Severity::from_level(level);

    let threat = Threat {
        id: generate_id(rng),
        severity,
        category,
        description: description.to_string(),
        time: Local::now().format("%H:%M:%S").to_string(),
    };

    log.push_front(threat.clone());
    log.truncate(MAX_THREATS);

    let alert = (severity == Severity::High).then(|| Alert::critical(description));
    (threat, alert)
}

fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cap_keeps_newest_first() {
        let mut log = VecDeque::new();
        let mut rng = StdRng::seed_from_u64(1);

        for i in 0..31 {
            add_threat(&mut log, "low", &format!("event-{i}"), &mut rng);
        }

        assert_eq!(log.len(), MAX_THREATS);
        assert_eq!(log[0].description, "event-30");
        assert_eq!(log[MAX_THREATS - 1].description, "event-1");
    }

    #[test]
    fn test_critical_maps_to_high_with_alert() {
        let mut log = VecDeque::new();
        let mut rng = StdRng::seed_from_u64(2);

        let (threat, alert) = add_threat(&mut log, "critical", "x", &mut rng);
        assert_eq!(threat.severity, Severity::High);
        assert_eq!(threat.category, Category::Malicious);

        let alert = alert.expect("high severity raises an alert");
        assert_eq!(alert.message, "x");
    }

    #[test]
    fn test_unknown_level_is_low_without_alert() {
        let mut log = VecDeque::new();
        let mut rng = StdRng::seed_from_u64(3);

        let (threat, alert) = add_threat(&mut log, "bogus", "x", &mut rng);
        assert_eq!(threat.severity, Severity::Low);
        assert_eq!(threat.category, Category::Info);
        assert!(alert.is_none());

        let (_, alert) = add_threat(&mut log, "medium", "y", &mut rng);
        assert!(alert.is_none());
    }

    #[test]
    fn test_id_and_time_format() {
        let mut log = VecDeque::new();
        let mut rng = StdRng::seed_from_u64(4);

        let (threat, _) = add_threat(&mut log, "high", "x", &mut rng);
        assert_eq!(threat.id.len(), 8);
        assert!(threat.id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

        let parts: Vec<&str> = threat.time.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.len() == 2 && p.parse::<u8>().is_ok()));
    }
}
