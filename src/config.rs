use std::time::Duration;

use crate::error::ConfigError;

pub const ENDPOINT_VAR: &str = "TRANSLATE_CORE_ENDPOINT";
pub const TIMEOUT_VAR: &str = "TRANSLATE_CORE_TIMEOUT_SECS";
pub const LOG_VAR: &str = "TRANSLATE_CORE_LOG";

const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_LOG_FILTER: &str = "translate_core=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub endpoint: Option<String>,
    pub timeout: Duration,
    pub log_filter: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CoreConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                cfg.endpoint = Some(endpoint.to_string());
            }
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidNumber {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            cfg.timeout = Duration::from_secs(secs);
        }

        if let Some(filter) = lookup(LOG_VAR) {
            if !filter.trim().is_empty() {
                cfg.log_filter = filter;
            }
        }

        Ok(cfg)
    }
}
