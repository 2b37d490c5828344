//! Configuration loading from the environment.

use thiserror::Error;

use lotkeeper_auth::Role;
use lotkeeper_observability::LogFormat;

pub const ALERT_THRESHOLD_ENV: &str = "LOTKEEPER_ALERT_THRESHOLD_DAYS";
pub const LOG_FORMAT_ENV: &str = "LOTKEEPER_LOG_FORMAT";
pub const ROLE_ENV: &str = "LOTKEEPER_ROLE";

pub const DEFAULT_ALERT_THRESHOLD_DAYS: i64 = 15;
/// Inclusive bounds of the user-adjustable alert threshold.
pub const ALERT_THRESHOLD_RANGE: core::ops::RangeInclusive<i64> = 1..=60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the inventory front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub alert_threshold_days: i64,
    pub log_format: LogFormat,
    pub role: Role,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            alert_threshold_days: DEFAULT_ALERT_THRESHOLD_DAYS,
            log_format: LogFormat::Json,
            role: Role::Administrator,
        }
    }
}

impl InventoryConfig {
    /// Read settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = get(ALERT_THRESHOLD_ENV) {
            let days: i64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: ALERT_THRESHOLD_ENV,
                value: raw.clone(),
                reason: "expected a whole number of days".to_string(),
            })?;
            if !ALERT_THRESHOLD_RANGE.contains(&days) {
                return Err(ConfigError::Invalid {
                    key: ALERT_THRESHOLD_ENV,
                    value: raw,
                    reason: format!(
                        "must be between {} and {}",
                        ALERT_THRESHOLD_RANGE.start(),
                        ALERT_THRESHOLD_RANGE.end()
                    ),
                });
            }
            config.alert_threshold_days = days;
        }

        if let Some(raw) = get(LOG_FORMAT_ENV) {
            config.log_format = LogFormat::parse(&raw).ok_or_else(|| ConfigError::Invalid {
                key: LOG_FORMAT_ENV,
                value: raw.clone(),
                reason: "expected 'json' or 'pretty'".to_string(),
            })?;
        }

        if let Some(raw) = get(ROLE_ENV) {
            config.role = raw.parse().map_err(|e: lotkeeper_core::DomainError| ConfigError::Invalid {
                key: ROLE_ENV,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(config)
    }
}
