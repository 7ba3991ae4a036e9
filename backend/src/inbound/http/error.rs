//! HTTP adapter mapping for domain errors.
//!
//! Field rejections that carry a symbolic code become a JSON body
//! `{"error": <code>, "message": <text>}`. Every other rejection is a short
//! plain-text body; store failures are logged and redacted.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::{Error, ErrorCode, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON body returned for coded rejections.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Symbolic code naming the rejected field.
    pub error: ErrorCode,
    /// Human-readable explanation.
    pub message: String,
}

const INTERNAL_ERROR_TEXT: &str = "internal server error";

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Unauthorized => StatusCode::UNAUTHORIZED,
        Error::BadOrderField { .. } | Error::BadOrderBy { .. } | Error::InvalidParameter { .. } => {
            StatusCode::BAD_REQUEST
        }
        Error::StoreUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn plain_text_for(error: &Error) -> String {
    match error {
        Error::StoreUnavailable { message } => {
            error!(%message, trace_id = ?TraceId::current(), "store failure redacted from response");
            INTERNAL_ERROR_TEXT.to_owned()
        }
        other => other.to_string(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self.code() {
            Some(code) => builder.json(ErrorBody {
                error: code,
                message: self.to_string(),
            }),
            None => builder
                .content_type(ContentType::plaintext())
                .body(plain_text_for(self)),
        }
    }
}
