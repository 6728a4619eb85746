//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::registry::{FanoutLimits, DEFAULT_REGISTRY_URL};
use crate::risk::RiskThresholds;

/// Settings for the hook and the `check` command.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaleguardConfig {
    /// Set to false to approve everything without inspection.
    pub enabled: bool,

    /// Base URL of the npm-compatible registry.
    pub registry_url: String,

    /// Timeout for each registry request.
    pub request_timeout_secs: u64,

    /// Deadline for all lookups of one command.
    pub aggregate_timeout_secs: u64,

    /// Maximum concurrent registry requests.
    pub max_in_flight: usize,

    /// Days after which a package is stale.
    pub stale_days: i64,

    /// Days after which a package is possibly abandoned.
    pub abandoned_days: i64,

    /// Host tool names that execute shell commands.
    pub shell_tools: Vec<String>,
}

impl Default for StaleguardConfig {
    fn default() -> Self {
        let thresholds = RiskThresholds::default();
        let limits = FanoutLimits::default();
        Self {
            enabled: true,
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            request_timeout_secs: 5,
            aggregate_timeout_secs: limits.aggregate_timeout.as_secs(),
            max_in_flight: limits.max_in_flight,
            stale_days: thresholds.stale_days,
            abandoned_days: thresholds.abandoned_days,
            shell_tools: vec!["Bash".to_string()],
        }
    }
}

impl StaleguardConfig {
    /// Age thresholds for the classifier.
    pub fn thresholds(&self) -> RiskThresholds {
        RiskThresholds {
            stale_days: self.stale_days,
            abandoned_days: self.abandoned_days,
        }
    }

    /// Concurrency limits for registry lookups.
    pub fn fanout_limits(&self) -> FanoutLimits {
        FanoutLimits {
            max_in_flight: self.max_in_flight,
            aggregate_timeout: Duration::from_secs(self.aggregate_timeout_secs),
        }
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StaleguardConfig::default();
        assert!(config.enabled);
        assert_eq!(config.registry_url, "https://registry.npmjs.org");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.fanout_limits(), FanoutLimits::default());
        assert_eq!(config.thresholds(), RiskThresholds::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config: StaleguardConfig = serde_yaml::from_str("stale_days: 180\n").unwrap();
        assert_eq!(config.stale_days, 180);
        assert_eq!(config.abandoned_days, 730);
        assert!(config.enabled);
    }

    #[test]
    fn default_shell_tools() {
        assert_eq!(StaleguardConfig::default().shell_tools, vec!["Bash"]);
    }

    #[test]
    fn shell_tools_configurable() {
        let config: StaleguardConfig =
            serde_yaml::from_str("shell_tools: [Bash, Shell]\n").unwrap();
        assert_eq!(config.shell_tools, vec!["Bash", "Shell"]);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result: Result<StaleguardConfig, _> = serde_yaml::from_str("max_in_flight: many\n");
        assert!(result.is_err());
    }
}
