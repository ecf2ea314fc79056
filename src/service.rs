//! Health-reporting service.
//!
//! Holds at most one configuration record and reports whether it has been
//! initialized. The HTTP health route does not consult this service.

use http::Uri;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Remote endpoint settings handed to [`LocalizeService::init`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// URL of the remote dependency
    pub endpoint: String,
    /// Request timeout in milliseconds
    pub timeout: u64,
}

impl ServiceConfig {
    pub fn new(endpoint: impl Into<String>, timeout: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    /// Check that the endpoint is an absolute http(s) URL and the timeout is non-zero.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: reason.to_string(),
        };

        let uri: Uri = self
            .endpoint
            .parse()
            .map_err(|e: http::uri::InvalidUri| invalid(&e.to_string()))?;

        match uri.scheme_str() {
            Some("http") | Some("https") => {}
            Some(_) => return Err(invalid("scheme must be http or https")),
            None => return Err(invalid("missing scheme")),
        }
        if uri.host().map_or(true, str::is_empty) {
            return Err(invalid("missing host"));
        }

        if self.timeout == 0 {
            return Err(ConfigurationError::InvalidTimeout);
        }
        Ok(())
    }
}

/// Placeholder service with an `init`/`health` lifecycle.
///
/// Starts uninitialized; the first `init` moves it to initialized and there
/// is no way back.
#[derive(Debug, Default)]
pub struct LocalizeService {
    config: Option<ServiceConfig>,
}

impl LocalizeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `config`, replacing any previously held record.
    pub fn init(&mut self, config: ServiceConfig) {
        tracing::debug!(
            endpoint = %config.endpoint,
            timeout_ms = config.timeout,
            replaced = self.config.is_some(),
            "Service initialized"
        );
        self.config = Some(config);
    }

    /// Validate `config`, then store it. On error the held record is unchanged.
    pub fn try_init(&mut self, config: ServiceConfig) -> Result<(), ConfigurationError> {
        config.validate()?;
        self.init(config);
        Ok(())
    }

    /// True once any record has been stored.
    pub fn health(&self) -> bool {
        self.config.is_some()
    }

    pub fn config(&self) -> Option<&ServiceConfig> {
        self.config.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_is_unhealthy() {
        let service = LocalizeService::new();
        assert!(!service.health());
        assert!(service.config().is_none());
    }

    #[test]
    fn test_init_then_health() {
        let mut service = LocalizeService::new();
        service.init(ServiceConfig::new("https://x", 500));
        assert!(service.health());
    }

    #[test]
    fn test_init_accepts_anything() {
        let mut service = LocalizeService::new();
        service.init(ServiceConfig::new("", 0));
        assert!(service.health());
    }

    #[test]
    fn test_reinit_last_write_wins() {
        let first = ServiceConfig::new("https://first.example", 100);
        let second = ServiceConfig::new("https://second.example", 2500);

        let mut service = LocalizeService::new();
        service.init(first);
        service.init(second.clone());

        assert!(service.health());
        assert_eq!(service.config(), Some(&second));
    }

    #[test]
    fn test_try_init_valid() {
        let mut service = LocalizeService::new();
        service
            .try_init(ServiceConfig::new("http://localhost:8080/api", 1000))
            .unwrap();
        assert!(service.health());
    }

    #[test]
    fn test_try_init_rejects_zero_timeout() {
        let mut service = LocalizeService::new();
        let err = service
            .try_init(ServiceConfig::new("https://x", 0))
            .unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidTimeout);
        assert!(!service.health());
    }

    #[test]
    fn test_try_init_rejects_bad_endpoints() {
        for endpoint in ["", "not a url", "/relative/path", "ftp://files.example", "localhost"] {
            let err = ServiceConfig::new(endpoint, 500).validate().unwrap_err();
            assert!(
                matches!(err, ConfigurationError::InvalidEndpoint { .. }),
                "expected {endpoint:?} to be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_failed_try_init_keeps_previous_record() {
        let good = ServiceConfig::new("https://good.example", 500);

        let mut service = LocalizeService::new();
        service.init(good.clone());
        assert!(service.try_init(ServiceConfig::new("nope", 500)).is_err());

        assert_eq!(service.config(), Some(&good));
    }

    #[test]
    fn test_config_deserializes_from_toml() {
        let config: ServiceConfig =
            toml::from_str("endpoint = \"https://x\"\ntimeout = 500").unwrap();
        assert_eq!(config, ServiceConfig::new("https://x", 500));
    }
}
