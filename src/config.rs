//! Peering Configuration
//!
//! Deployment mode selection plus the timing knobs for the refresh loop.
//! Mode is normally taken from the environment (`NETWORK_ENV`, `TEST_HOST`);
//! retry and interval defaults match the production deployment.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable selecting the deployment environment
pub const NETWORK_ENV_VAR: &str = "NETWORK_ENV";

/// Environment variable enabling the test-host harness
pub const TEST_HOST_VAR: &str = "TEST_HOST";

/// Which network deployment this process belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentEnv {
    /// Mainnet deployment, polls the production subgraph
    #[default]
    Production,

    /// Testnet deployment, polls the staging subgraph
    Staging,

    /// Isolated single-node deployment; never polls, discovery reads are empty
    Standalone,
}

impl DeploymentEnv {
    /// Parse the `NETWORK_ENV` value; unknown values fall back to production
    pub fn parse(value: &str) -> Self {
        match value {
            "staging" => DeploymentEnv::Staging,
            "standalone" => DeploymentEnv::Standalone,
            _ => DeploymentEnv::Production,
        }
    }
}

/// Main configuration for the peering registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeeringConfig {
    // === Deployment ===

    /// Deployment environment (selects subgraph endpoint and gating)
    pub env: DeploymentEnv,

    /// Test harness hostname; when set, discovery reads return fixed
    /// substitute records and no polling happens
    pub test_host: Option<String>,

    // === Timing ===

    /// Interval between background registry refreshes (seconds)
    pub refresh_interval_secs: u64,

    /// Timeout for a single subgraph request (seconds)
    pub fetch_timeout_secs: u64,

    // === Retry ===

    /// Attempts per refresh before giving up
    pub max_fetch_attempts: u32,

    /// Delay before the first retry; doubles on each subsequent attempt
    pub retry_initial_delay_ms: u64,
}

impl Default for PeeringConfig {
    fn default() -> Self {
        Self {
            env: DeploymentEnv::Production,
            test_host: None,

            // Timing - hourly refresh, one minute per request
            refresh_interval_secs: 3600,
            fetch_timeout_secs: 60,

            // Retry
            max_fetch_attempts: 5,
            retry_initial_delay_ms: 500,
        }
    }
}

impl PeeringConfig {
    /// Build configuration from the process environment
    pub fn from_env() -> Self {
        let env = std::env::var(NETWORK_ENV_VAR)
            .map(|v| DeploymentEnv::parse(&v))
            .unwrap_or_default();

        let test_host = std::env::var(TEST_HOST_VAR)
            .ok()
            .filter(|v| !v.is_empty());

        Self {
            env,
            test_host,
            ..Default::default()
        }
    }

    /// Load configuration from TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    // Builder-style methods for host overrides

    pub fn with_env(mut self, env: DeploymentEnv) -> Self {
        self.env = env;
        self
    }

    pub fn with_test_host(mut self, host: impl Into<String>) -> Self {
        self.test_host = Some(host.into());
        self
    }

    pub fn with_refresh_interval_secs(mut self, secs: u64) -> Self {
        self.refresh_interval_secs = secs;
        self
    }

    /// Whether the staging subgraph endpoint should be used
    pub fn is_staging(&self) -> bool {
        self.env == DeploymentEnv::Staging
    }

    /// Refresh interval as a [`Duration`]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Per-request timeout as a [`Duration`]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Initial retry delay as a [`Duration`]
    pub fn retry_initial_delay(&self) -> Duration {
        Duration::from_millis(self.retry_initial_delay_ms)
    }

    /// Validate configuration values
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.refresh_interval_secs == 0 {
            anyhow::bail!("refresh_interval_secs must be non-zero");
        }

        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("fetch_timeout_secs must be non-zero");
        }

        if self.max_fetch_attempts == 0 {
            anyhow::bail!("max_fetch_attempts must be non-zero");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PeeringConfig::default();
        assert_eq!(config.env, DeploymentEnv::Production);
        assert_eq!(config.refresh_interval_secs, 3600);
        assert_eq!(config.fetch_timeout_secs, 60);
        assert!(config.test_host.is_none());
        assert!(!config.is_staging());
    }

    #[test]
    fn test_env_parsing() {
        assert_eq!(DeploymentEnv::parse("staging"), DeploymentEnv::Staging);
        assert_eq!(
            DeploymentEnv::parse("standalone"),
            DeploymentEnv::Standalone
        );
        assert_eq!(DeploymentEnv::parse("prod"), DeploymentEnv::Production);
        assert_eq!(DeploymentEnv::parse(""), DeploymentEnv::Production);
    }

    #[test]
    fn test_config_validation() {
        let mut config = PeeringConfig::default();
        assert!(config.validate().is_ok());

        config.refresh_interval_secs = 0;
        assert!(config.validate().is_err());

        config = PeeringConfig::default();
        config.max_fetch_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_methods() {
        let config = PeeringConfig::default()
            .with_env(DeploymentEnv::Staging)
            .with_test_host("com1")
            .with_refresh_interval_secs(60);

        assert!(config.is_staging());
        assert_eq!(config.test_host.as_deref(), Some("com1"));
        assert_eq!(config.refresh_interval_secs, 60);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("peering.toml");

        let config = PeeringConfig::default().with_env(DeploymentEnv::Standalone);
        config.save(&path).unwrap();

        let loaded = PeeringConfig::load(&path).unwrap();
        assert_eq!(loaded.env, DeploymentEnv::Standalone);
        assert_eq!(loaded.refresh_interval_secs, 3600);
    }
}
