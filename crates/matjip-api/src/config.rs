//! Gateway configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so a bare `cargo run` talks to a local backend and fixture
//! gateways cover everything that isn't reachable.

use std::env;
use std::time::Duration;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL (dish catalog, orders, auth, image upload).
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// NTS (국세청) open-API base URL for business verification.
    pub nts_base_url: String,

    /// NTS service key. Absent means the business verifier runs in fixture
    /// mode.
    pub nts_service_key: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs: u64 = env::var("MATJIP_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("MATJIP_API_TIMEOUT_SECS".to_string()))?;

        Ok(ApiConfig {
            base_url: env::var("MATJIP_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            timeout: Duration::from_secs(timeout_secs),

            nts_base_url: env::var("MATJIP_NTS_BASE_URL")
                .unwrap_or_else(|_| "https://api.odcloud.kr/api/nts-businessman".to_string()),

            nts_service_key: env::var("MATJIP_NTS_SERVICE_KEY").ok(),
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(10),
            nts_base_url: "https://api.odcloud.kr/api/nts-businessman".to_string(),
            nts_service_key: None,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.nts_service_key.is_none());
    }
}
