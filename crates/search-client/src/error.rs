//! Client error types.

use thiserror::Error;

/// Failure to construct a [`crate::SearchClient`].
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The endpoint is not an absolute `http` or `https` URL.
    #[error("invalid search endpoint {endpoint:?}: {message}")]
    InvalidEndpoint {
        /// Endpoint as configured.
        endpoint: String,
        /// Why it was rejected.
        message: String,
    },
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Symbolic code carried by a 400 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadRequestCode {
    /// `ErrorBadOrderField`: unknown `order_field`.
    BadOrderField,
    /// `ErrorBadOrderBy`: `order_by` outside `-1..=1`.
    BadOrderBy,
    /// The body was missing, not JSON, or carried an unknown code.
    Unclassified,
}

impl BadRequestCode {
    /// Map a wire code to its variant; unknown codes are [`Self::Unclassified`].
    #[must_use]
    pub fn from_wire(code: &str) -> Self {
        match code {
            "ErrorBadOrderField" => Self::BadOrderField,
            "ErrorBadOrderBy" => Self::BadOrderBy,
            _ => Self::Unclassified,
        }
    }
}

/// Failure of a [`crate::SearchClient::find_users`] call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The query limit is negative; nothing was sent.
    #[error("limit must not be negative, got {limit}")]
    InvalidLimit {
        /// Rejected limit.
        limit: i64,
    },
    /// The query offset is negative; nothing was sent.
    #[error("offset must not be negative, got {offset}")]
    InvalidOffset {
        /// Rejected offset.
        offset: i64,
    },
    /// The credential is missing or unusable, or the server answered 401.
    #[error("unauthorized")]
    Unauthorized,
    /// The request did not complete within the configured timeout.
    #[error("search request timed out: {message}")]
    Timeout {
        /// Transport detail.
        message: String,
    },
    /// The request could not be delivered.
    #[error("search request failed: {message}")]
    ConnectionFailed {
        /// Transport detail.
        message: String,
    },
    /// The server rejected the query.
    #[error("search rejected: {code:?}")]
    BadRequest {
        /// Why the server rejected it.
        code: BadRequestCode,
    },
    /// The server failed while handling the query.
    #[error("search server fault: status {status}")]
    ServerFault {
        /// HTTP status returned.
        status: u16,
    },
    /// The response did not match the search API contract.
    #[error("unexpected search response: {message}")]
    UnexpectedResponse {
        /// What did not match.
        message: String,
    },
}

impl SearchError {
    /// Whether repeating the identical call may succeed.
    ///
    /// Transport failures and server faults are retryable; everything else
    /// needs a different query, a different credential or a fixed server.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::ConnectionFailed { .. } | Self::ServerFault { .. }
        )
    }
}
