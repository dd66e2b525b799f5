//! Configuration types for the Algolia client.

use std::time::Duration;

use crate::errors::IndexError;

/// Default request timeout for a single batch write.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for an Algolia index.
#[derive(Clone)]
pub struct AlgoliaConfig {
    /// Algolia application identifier.
    pub application_id: String,
    /// API key with write access to the index.
    pub api_key: String,
    /// Target index name.
    pub index_name: String,
    /// Override for the write host, e.g. a local proxy.
    /// When `None`, `https://{application_id}.algolia.net` is used.
    pub host: Option<String>,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl AlgoliaConfig {
    /// Create a config targeting the default Algolia host.
    pub fn new(
        application_id: impl Into<String>,
        api_key: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            application_id: application_id.into(),
            api_key: api_key.into(),
            index_name: index_name.into(),
            host: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Send requests to a custom host instead of the application's default.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The base URL requests are sent to.
    pub fn write_host(&self) -> String {
        match &self.host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => format!("https://{}.algolia.net", self.application_id),
        }
    }

    /// Check that every required field is present.
    pub fn validate(&self) -> Result<(), IndexError> {
        if self.application_id.trim().is_empty() {
            return Err(IndexError::configuration("Application ID is required"));
        }
        if self.api_key.trim().is_empty() {
            return Err(IndexError::configuration("API Key is required"));
        }
        if self.index_name.trim().is_empty() {
            return Err(IndexError::configuration("Index name is required"));
        }
        if self.timeout.is_zero() {
            return Err(IndexError::configuration("Timeout must be greater than zero"));
        }
        Ok(())
    }
}

// The API key stays out of logs and panic messages.
impl std::fmt::Debug for AlgoliaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgoliaConfig")
            .field("application_id", &self.application_id)
            .field("api_key", &"<redacted>")
            .field("index_name", &self.index_name)
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_write_host() {
        let config = AlgoliaConfig::new("APPID", "key", "products");
        assert_eq!(config.write_host(), "https://APPID.algolia.net");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_custom_host_trims_trailing_slash() {
        let config = AlgoliaConfig::new("APPID", "key", "products").with_host("http://localhost:8080/");
        assert_eq!(config.write_host(), "http://localhost:8080");
    }

    #[test]
    fn test_validate_requires_fields() {
        assert!(AlgoliaConfig::new("APPID", "key", "products").validate().is_ok());

        let err = AlgoliaConfig::new("", "key", "products").validate().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Application ID is required");

        let err = AlgoliaConfig::new("APPID", " ", "products").validate().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: API Key is required");

        assert!(AlgoliaConfig::new("APPID", "key", "").validate().is_err());
        assert!(AlgoliaConfig::new("APPID", "key", "products")
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AlgoliaConfig::new("APPID", "super-secret", "products");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
