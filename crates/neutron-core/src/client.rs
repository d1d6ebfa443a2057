//! HTTP transport settings.
//!
//! The networking client performs no retries and applies no timeouts of its own.
//! Anything of that kind is a property of the transport and is configured here.

use std::time::Duration;

/// Default user agent sent by Neutron clients.
pub const DEFAULT_USER_AGENT: &str = concat!("neutron-client/", env!("CARGO_PKG_VERSION"));

/// Upper bound accepted for configured timeouts, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// HTTP transport configuration.
///
/// Every field defaults to the behaviour of a plain HTTP client: no request
/// timeout, no connect timeout, gzip decoding on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Overall request timeout
    pub timeout: Option<Duration>,

    /// TCP connect timeout
    pub connect_timeout: Option<Duration>,

    /// `User-Agent` header value
    pub user_agent: String,

    /// Emit a `tracing` event per request
    pub enable_logging: bool,

    /// Enable response compression
    pub enable_compression: bool,
}

impl TransportConfig {
    /// Create a new transport configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            enable_logging: true,
            enable_compression: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enable or disable logging.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }

    /// Build a `reqwest` client honouring these settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigError`] if the TLS backend or resolver
    /// cannot be initialised.
    pub fn build_http_client(&self) -> crate::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if !self.enable_compression {
            builder = builder.no_gzip();
        }

        builder
            .build()
            .map_err(|err| crate::Error::ConfigError(format!("Failed to build HTTP client: {err}")))
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_config_new() {
        let config = TransportConfig::new();
        assert!(config.timeout.is_none());
        assert!(config.connect_timeout.is_none());
        assert!(config.user_agent.starts_with("neutron-client/"));
        assert!(config.enable_logging);
        assert!(config.enable_compression);
    }

    #[test]
    fn test_transport_config_default() {
        assert_eq!(TransportConfig::default(), TransportConfig::new());
    }

    #[test]
    fn test_transport_config_builder() {
        let config = TransportConfig::new()
            .with_timeout(Duration::from_secs(60))
            .with_connect_timeout(Duration::from_secs(5))
            .with_user_agent("ops-tool/1.0")
            .with_logging(false)
            .with_compression(false);

        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent, "ops-tool/1.0");
        assert!(!config.enable_logging);
        assert!(!config.enable_compression);
    }

    #[test]
    fn test_build_http_client() {
        let config = TransportConfig::new().with_timeout(Duration::from_secs(1));
        assert!(config.build_http_client().is_ok());
    }
}
