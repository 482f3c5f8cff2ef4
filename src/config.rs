use std::env;

use crate::error::ProxyError;

/// Name of the environment variable holding the upstream host.
pub const ENDPOINT_VAR: &str = "ENDPOINT";

/// Per-invocation configuration, read from the Lambda environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
}

impl Config {
    /// Reads the upstream endpoint from `ENDPOINT`.
    ///
    /// Called inside the handler, so a missing or malformed value fails that
    /// invocation before any network attempt is made.
    pub fn from_env() -> Result<Self, ProxyError> {
        Self::from_var(ENDPOINT_VAR)
    }

    fn from_var(name: &str) -> Result<Self, ProxyError> {
        let value = env::var(name).map_err(|_| ProxyError::MissingEndpoint)?;
        Self::new(value)
    }

    /// Builds a config from an endpoint value.
    ///
    /// The value must be a bare authority: `host` or `host:port`, with no
    /// scheme and no path.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ProxyError> {
        let endpoint = endpoint.into().trim().to_string();

        if endpoint.is_empty() {
            return Err(ProxyError::InvalidEndpoint("empty host".to_string()));
        }

        if endpoint.contains("://")
            || endpoint.contains('/')
            || endpoint.chars().any(char::is_whitespace)
        {
            return Err(ProxyError::InvalidEndpoint(endpoint));
        }

        Ok(Self { endpoint })
    }

    /// Base URL for upstream requests. The transport is always HTTPS.
    pub fn base_url(&self) -> String {
        format!("https://{}", self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_var_missing() {
        let err = Config::from_var("PETS_PROXY_TEST_UNSET").unwrap_err();
        assert!(matches!(err, ProxyError::MissingEndpoint));
    }

    #[test]
    fn test_from_var_set() {
        env::set_var("PETS_PROXY_TEST_ENDPOINT", "api.example.internal");
        let config = Config::from_var("PETS_PROXY_TEST_ENDPOINT").unwrap();
        assert_eq!(config.endpoint, "api.example.internal");
    }

    #[test]
    fn test_rejects_empty_value() {
        assert!(matches!(
            Config::new(""),
            Err(ProxyError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            Config::new("   "),
            Err(ProxyError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_rejects_scheme_prefix() {
        assert!(matches!(
            Config::new("https://api.example.internal"),
            Err(ProxyError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_rejects_path_component() {
        assert!(matches!(
            Config::new("api.example.internal/pets"),
            Err(ProxyError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_rejects_embedded_whitespace() {
        assert!(matches!(
            Config::new("api.example .internal"),
            Err(ProxyError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_accepts_host_with_port() {
        let config = Config::new("api.example.internal:8443").unwrap();
        assert_eq!(config.base_url(), "https://api.example.internal:8443");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let config = Config::new(" api.example.internal ").unwrap();
        assert_eq!(config.endpoint, "api.example.internal");
    }

    #[test]
    fn test_base_url() {
        let config = Config::new("api.example.internal").unwrap();
        assert_eq!(config.base_url(), "https://api.example.internal");
    }
}
