//! Configuration types.

use std::time::Duration;

/// Upper bound on the downstream response body excerpt surfaced to callers.
pub const MAX_DETAIL_LEN: usize = 2000;

/// Service configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Destination workflow webhook. `None` is a first-class failure mode
    /// reported at forward time, never a startup crash.
    pub flow_url: Option<String>,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Bounded timeout for the single outbound delivery attempt.
    pub forward_timeout: Duration,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            flow_url: None,
            port: 8080,
            forward_timeout: Duration::from_secs(30),
        }
    }
}

impl IntakeConfig {
    /// Build configuration from the environment.
    ///
    /// `POWER_AUTOMATE_URL` — destination webhook (blank treated as unset).
    /// `INTAKE_PORT` — bind port (default 8080).
    /// `INTAKE_FORWARD_TIMEOUT_SECS` — outbound timeout (default 30).
    pub fn from_env() -> Self {
        let flow_url = std::env::var("POWER_AUTOMATE_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let port = std::env::var("INTAKE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        let forward_timeout = std::env::var("INTAKE_FORWARD_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Self {
            flow_url,
            port,
            forward_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_destination() {
        let cfg = IntakeConfig::default();
        assert!(cfg.flow_url.is_none());
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.forward_timeout, Duration::from_secs(30));
    }
}
