//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `max_bytes` is 0 or exceeds 50MB
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `user_agent` is empty
    /// - `dubious_terms` is empty or contains an empty term
    /// - no site or location is configured
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_bytes == 0 {
            return Err(ConfigError::Invalid { field: "max_bytes".into(), reason: "must be greater than 0".into() });
        }
        if self.max_bytes > 50 * 1024 * 1024 {
            return Err(ConfigError::Invalid { field: "max_bytes".into(), reason: "must not exceed 50MB".into() });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.dubious_terms.is_empty() {
            return Err(ConfigError::Invalid { field: "dubious_terms".into(), reason: "must not be empty".into() });
        }
        if self.dubious_terms.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                field: "dubious_terms".into(),
                reason: "terms must not be empty".into(),
            });
        }

        if self.craigslist_sites.is_empty() && self.ziprecruiter_locations.is_empty() {
            return Err(ConfigError::Invalid {
                field: "craigslist_sites".into(),
                reason: "at least one site or location must be configured".into(),
            });
        }

        if self.site_delay_ms < 1000 || self.page_delay_ms < 1000 {
            tracing::warn!(
                site_delay_ms = self.site_delay_ms,
                page_delay_ms = self.page_delay_ms,
                "politeness delay below 1s; consider a longer delay for live scans"
            );
        }

        Ok(())
    }
}
