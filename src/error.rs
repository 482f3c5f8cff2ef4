use std::fmt;

/// Unified error type for the pets proxy.
///
/// Configuration problems are detected before any network attempt; transport
/// failures wrap the underlying client error. Every variant surfaces as an
/// invocation fault through the Lambda runtime.
#[derive(Debug)]
pub enum ProxyError {
    MissingEndpoint,
    InvalidEndpoint(String),
    Upstream(reqwest::Error),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::MissingEndpoint => {
                write!(f, "ENDPOINT environment variable is not set")
            }
            ProxyError::InvalidEndpoint(value) => write!(f, "invalid ENDPOINT value: {value}"),
            ProxyError::Upstream(err) => write!(f, "upstream request failed: {err}"),
        }
    }
}

impl std::error::Error for ProxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProxyError::Upstream(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Upstream(err)
    }
}
