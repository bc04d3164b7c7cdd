//! Configuration module

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Default bind port
pub const DEFAULT_PORT: u16 = 5500;

/// Default simulation period in milliseconds
pub const DEFAULT_SIMULATION_INTERVAL_MS: u64 = 2_000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Period of the simulation loop
    pub simulation_interval: Duration,

    /// Send desktop notifications for high severity threats
    pub notifications_enabled: bool,

    /// Directory checked for an `index.html` override
    pub templates_dir: PathBuf,

    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            simulation_interval: Duration::from_millis(DEFAULT_SIMULATION_INTERVAL_MS),
            notifications_enabled: true,
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let interval_ms = lookup("SIMULATION_INTERVAL_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_SIMULATION_INTERVAL_MS)
            .max(1);

        Self {
            host: lookup("HOST")
                .and_then(|h| h.trim().parse().ok())
                .unwrap_or(defaults.host),

            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),

            simulation_interval: Duration::from_millis(interval_ms),

            notifications_enabled: lookup("NOTIFICATIONS_ENABLED")
                .map(|s| {
                    let s = s.trim().to_lowercase();
                    s != "false" && s != "0"
                })
                .unwrap_or(defaults.notifications_enabled),

            templates_dir: lookup("TEMPLATES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.templates_dir),

            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_demo() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.port, 5500);
        assert_eq!(config.simulation_interval, Duration::from_secs(2));
        assert!(config.notifications_enabled);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:5500");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("SIMULATION_INTERVAL_MS", "250"),
            ("NOTIFICATIONS_ENABLED", "FALSE"),
            ("STATIC_DIR", "/srv/assets"),
        ]));
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8081");
        assert_eq!(config.simulation_interval, Duration::from_millis(250));
        assert!(!config.notifications_enabled);
        assert_eq!(config.static_dir, PathBuf::from("/srv/assets"));
        assert_eq!(config.templates_dir, PathBuf::from("templates"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("SIMULATION_INTERVAL_MS", "0"),
            ("HOST", "nowhere"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.simulation_interval, Duration::from_millis(1));
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }
}
