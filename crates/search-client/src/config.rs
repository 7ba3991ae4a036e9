//! Client configuration.

use std::time::Duration;

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Connection settings for [`crate::SearchClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchClientConfig {
    /// Absolute URL of the search endpoint, e.g. `http://host:8080/api/v1/search`.
    pub endpoint: String,
    /// Shared secret sent in the `AccessToken` header.
    pub access_token: String,
    /// Upper bound on a whole request, connect through body.
    pub timeout: Duration,
}

impl SearchClientConfig {
    /// Create a configuration with [`DEFAULT_TIMEOUT`].
    #[must_use]
    pub fn new(endpoint: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
