//! Reqwest-backed search client.
//!
//! Owns transport details only: request encoding, the look-ahead limit, status
//! classification and JSON decoding.

use pagination::{Page, Window, WindowError, lookahead_limit};
use reqwest::header::HeaderValue;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::config::SearchClientConfig;
use crate::dto::{ErrorResponseDto, User};
use crate::error::{BadRequestCode, ClientBuildError, SearchError};
use crate::query::SearchQuery;

/// Header carrying the shared secret.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Users returned by one call plus whether more matches follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// At most `limit` users, in server order.
    pub users: Vec<User>,
    /// `true` when at least one more user matches beyond this page.
    pub next_page: bool,
}

impl From<Page<User>> for SearchResult {
    fn from(page: Page<User>) -> Self {
        Self {
            users: page.items,
            next_page: page.has_more,
        }
    }
}

/// Client for the search endpoint. Cheap to clone; clones share one
/// connection pool.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    endpoint: Url,
    access_token: String,
}

impl SearchClient {
    /// Build a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError::InvalidEndpoint`] when the endpoint is not
    /// an absolute `http`/`https` URL, or [`ClientBuildError::Http`] when the
    /// reqwest client cannot be constructed.
    pub fn new(config: SearchClientConfig) -> Result<Self, ClientBuildError> {
        let SearchClientConfig {
            endpoint,
            access_token,
            timeout,
        } = config;
        let parsed = parse_endpoint(&endpoint)?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: parsed,
            access_token,
        })
    }

    /// Run one search.
    ///
    /// Negative windows and unusable credentials fail without a network call.
    /// The server is asked for `limit + 1` users; the surplus is dropped and
    /// reported through [`SearchResult::next_page`].
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] describing why no result could be produced.
    pub async fn find_users(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        let window = Window::try_from_signed(query.offset, query.limit).map_err(|err| match err {
            WindowError::NegativeLimit { limit } => SearchError::InvalidLimit { limit },
            WindowError::NegativeOffset { offset } => SearchError::InvalidOffset { offset },
        })?;
        let token = self.credential()?;
        let limit = window.limit;
        let request_limit = wire_limit(limit);

        debug!(
            endpoint = %self.endpoint,
            limit,
            request_limit,
            offset = query.offset,
            "dispatching search request"
        );
        let response = self
            .http
            .get(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, token)
            .query(&query.to_params(request_limit))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            let error = map_status_error(status, body.as_ref());
            warn!(%status, error = %error, "search request rejected");
            return Err(error);
        }

        let users = parse_users(body.as_ref())?;
        Ok(Page::from_lookahead(users, limit).into())
    }

    fn credential(&self) -> Result<HeaderValue, SearchError> {
        if self.access_token.is_empty() {
            return Err(SearchError::Unauthorized);
        }
        let mut value =
            HeaderValue::from_str(&self.access_token).map_err(|_| SearchError::Unauthorized)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// Look-ahead limit to send, kept within the server's signed 64-bit range.
///
/// At the top of the range the surplus record cannot be requested; the server
/// then returns every match and [`SearchResult::next_page`] is `false`.
fn wire_limit(limit: usize) -> usize {
    let max_wire = usize::try_from(i64::MAX).unwrap_or(usize::MAX);
    lookahead_limit(limit).min(max_wire)
}

fn parse_endpoint(endpoint: &str) -> Result<Url, ClientBuildError> {
    let invalid = |message: String| ClientBuildError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        message,
    };
    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other:?}"))),
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<User>, SearchError> {
    serde_json::from_slice(body).map_err(|error| {
        warn!(error = %error, "search response did not decode");
        SearchError::UnexpectedResponse {
            message: format!("invalid user list payload: {error}"),
        }
    })
}

fn map_transport_error(error: reqwest::Error) -> SearchError {
    let message = error.to_string();
    if error.is_timeout() {
        warn!(%message, "search request timed out");
        SearchError::Timeout { message }
    } else {
        warn!(%message, "search request failed");
        SearchError::ConnectionFailed { message }
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SearchError {
    match status {
        StatusCode::UNAUTHORIZED => SearchError::Unauthorized,
        _ if status.is_client_error() => {
            let code = serde_json::from_slice::<ErrorResponseDto>(body)
                .map_or(BadRequestCode::Unclassified, |dto| {
                    BadRequestCode::from_wire(&dto.error)
                });
            SearchError::BadRequest { code }
        }
        _ if status.is_server_error() => SearchError::ServerFault {
            status: status.as_u16(),
        },
        _ => SearchError::UnexpectedResponse {
            message: format!("unexpected status {}", status.as_u16()),
        },
    }
}
