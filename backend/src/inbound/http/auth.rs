//! Shared-secret header check.
//!
//! Any non-empty value is accepted; matching it against a policy is outside
//! this service.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};
use tracing::debug;

use crate::domain::Error;

/// Header carrying the shared-secret credential.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Extractor proving the request carried a non-empty access token.
///
/// Rejects with [`Error::Unauthorized`] before any other extractor or the
/// handler body runs when it is listed first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Raw header value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for AccessToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(access_token_from(req))
    }
}

fn access_token_from(req: &HttpRequest) -> Result<AccessToken, Error> {
    let token = req
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty());
    match token {
        Some(value) => Ok(AccessToken(value.to_owned())),
        None => {
            debug!(path = req.path(), "request without access token rejected");
            Err(Error::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    fn accepts_any_non_empty_token() {
        let req = TestRequest::default()
            .insert_header((ACCESS_TOKEN_HEADER, "password"))
            .to_http_request();
        let token = access_token_from(&req).expect("token accepted");
        assert_eq!(token.as_str(), "password");
    }

    #[rstest]
    fn header_name_is_case_insensitive() {
        let req = TestRequest::default()
            .insert_header(("accesstoken", "s3cret"))
            .to_http_request();
        assert!(access_token_from(&req).is_ok());
    }

    #[rstest]
    #[case::missing(None)]
    #[case::empty(Some(""))]
    fn rejects_absent_or_empty_token(#[case] value: Option<&str>) {
        let mut builder = TestRequest::default();
        if let Some(value) = value {
            builder = builder.insert_header((ACCESS_TOKEN_HEADER, value));
        }
        let req = builder.to_http_request();
        assert_eq!(access_token_from(&req), Err(Error::Unauthorized));
    }
}
