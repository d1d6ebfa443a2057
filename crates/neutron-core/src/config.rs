//! Configuration structures for Neutron clients.
//!
//! [`NetworkingConfig`] is the deserializable form of the client's construction
//! parameters plus the optional transport timeouts. The auth token is held as a
//! [`SecretString`], so it is redacted from `Debug` output and never serialized.

use crate::client::{TransportConfig, MAX_TIMEOUT_SECS};
use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

/// Environment variable holding the networking endpoint.
pub const ENV_URL: &str = "NEUTRON_URL";

/// Environment variable holding the auth token.
pub const ENV_AUTH_TOKEN: &str = "NEUTRON_AUTH_TOKEN";

/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "NEUTRON_TIMEOUT_SECS";

/// Configuration for a networking client instance.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NetworkingConfig {
    /// Base URL of the networking service, used verbatim
    pub base_url: String,

    /// Token sent in the `X-Auth-Token` header
    #[serde(skip_serializing)]
    pub auth_token: SecretString,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = MAX_TIMEOUT_SECS))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Connect timeout in seconds
    #[validate(range(min = 1, max = MAX_TIMEOUT_SECS))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
}

impl NetworkingConfig {
    /// Create a new configuration with required parameters.
    ///
    /// Neither value is checked; the base URL is kept exactly as given.
    #[must_use]
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: SecretString::from(auth_token.into()),
            request_timeout_secs: None,
            connect_timeout_secs: None,
        }
    }

    /// Load configuration from `NEUTRON_URL`, `NEUTRON_AUTH_TOKEN` and the
    /// optional `NEUTRON_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing, the timeout does not
    /// parse, or validation fails.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`NetworkingConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_URL)
            .ok_or_else(|| Error::ConfigError(format!("{ENV_URL} is not set")))?;
        let token = lookup(ENV_AUTH_TOKEN)
            .ok_or_else(|| Error::ConfigError(format!("{ENV_AUTH_TOKEN} is not set")))?;

        let mut config = Self::new(base_url, token);
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                Error::ConfigError(format!("Invalid {ENV_TIMEOUT_SECS} `{raw}`: {e}"))
            })?;
            config = config.with_timeout(secs);
        }

        config.check()?;
        Ok(config)
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = Some(seconds);
        self
    }

    /// Set connect timeout in seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout_secs = Some(seconds);
        self
    }

    /// Run field validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if a timeout is outside
    /// `1..=MAX_TIMEOUT_SECS` seconds.
    pub fn check(&self) -> Result<(), Error> {
        self.validate()?;
        Ok(())
    }

    /// Expose the auth token.
    #[must_use]
    pub fn auth_token(&self) -> &str {
        self.auth_token.expose_secret()
    }

    /// Transport settings derived from this configuration.
    #[must_use]
    pub fn transport(&self) -> TransportConfig {
        let mut transport = TransportConfig::new();
        if let Some(secs) = self.request_timeout_secs {
            transport = transport.with_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.connect_timeout_secs {
            transport = transport.with_connect_timeout(Duration::from_secs(secs));
        }
        transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_networking_config_new() {
        let config = NetworkingConfig::new("http://neutron:9696", "tok");
        assert_eq!(config.base_url, "http://neutron:9696");
        assert_eq!(config.auth_token(), "tok");
        assert!(config.request_timeout_secs.is_none());
        assert!(config.connect_timeout_secs.is_none());
    }

    #[test]
    fn test_base_url_not_normalized() {
        let config = NetworkingConfig::new("http://neutron:9696/", "tok");
        assert_eq!(config.base_url, "http://neutron:9696/");
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let config = NetworkingConfig::new("http://neutron:9696", "super-secret-token");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-token"));
    }

    #[test]
    fn test_token_not_serialized() {
        let config = NetworkingConfig::new("http://neutron:9696", "super-secret-token");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret-token"));
        assert!(json.contains("http://neutron:9696"));
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "base_url": "https://cloud.example.com:9696",
            "auth_token": "gAAAAABf",
            "request_timeout_secs": 45
        }"#;
        let config: NetworkingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "https://cloud.example.com:9696");
        assert_eq!(config.auth_token(), "gAAAAABf");
        assert_eq!(config.request_timeout_secs, Some(45));
        assert!(config.connect_timeout_secs.is_none());
    }

    #[test]
    fn test_validation_timeout_range() {
        let mut config = NetworkingConfig::new("http://neutron:9696", "tok");
        config.request_timeout_secs = Some(0);
        assert!(config.check().is_err());

        config.request_timeout_secs = Some(MAX_TIMEOUT_SECS + 1);
        let err = config.check().unwrap_err();
        assert!(matches!(err, Error::ValidationError(ref m) if m.contains("request_timeout_secs")));
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        config.request_timeout_secs = Some(MAX_TIMEOUT_SECS);
        assert!(config.check().is_ok());

        config.request_timeout_secs = Some(30);
        assert!(config.check().is_ok());

        config.connect_timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_transport_from_config() {
        let config = NetworkingConfig::new("http://neutron:9696", "tok")
            .with_timeout(30)
            .with_connect_timeout(5);
        let transport = config.transport();
        assert_eq!(transport.timeout, Some(Duration::from_secs(30)));
        assert_eq!(transport.connect_timeout, Some(Duration::from_secs(5)));

        let bare = NetworkingConfig::new("http://neutron:9696", "tok").transport();
        assert!(bare.timeout.is_none());
    }

    #[test]
    fn test_transport_keeps_unchecked_values() {
        let config = NetworkingConfig::new("http://neutron:9696", "tok").with_timeout(900);
        assert!(config.check().is_err());
        assert_eq!(config.transport().timeout, Some(Duration::from_secs(900)));
    }

    #[test]
    fn test_from_lookup() {
        let config = NetworkingConfig::from_lookup(lookup_from(&[
            (ENV_URL, "http://neutron:9696"),
            (ENV_AUTH_TOKEN, "tok"),
            (ENV_TIMEOUT_SECS, "20"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://neutron:9696");
        assert_eq!(config.request_timeout_secs, Some(20));
    }

    #[test]
    fn test_from_lookup_missing_token() {
        let err = NetworkingConfig::from_lookup(lookup_from(&[(ENV_URL, "http://neutron:9696")]))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigError(ref m) if m.contains(ENV_AUTH_TOKEN)));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let result = NetworkingConfig::from_lookup(lookup_from(&[
            (ENV_URL, "http://neutron:9696"),
            (ENV_AUTH_TOKEN, "tok"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]));
        assert!(result.is_err());

        let result = NetworkingConfig::from_lookup(lookup_from(&[
            (ENV_URL, "http://neutron:9696"),
            (ENV_AUTH_TOKEN, "tok"),
            (ENV_TIMEOUT_SECS, "900"),
        ]));
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }
}
