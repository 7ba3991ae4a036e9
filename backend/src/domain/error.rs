//! Domain-level error type for the search use-case.
//!
//! These errors are transport agnostic. The HTTP adapter maps each variant
//! to a status code and body shape.

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Symbolic code naming the specific query field a rejection is about.
///
/// Serialised with the exact names clients match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// `order_field` is outside `"" | "id" | "age" | "name"`.
    #[serde(rename = "ErrorBadOrderField")]
    BadOrderField,
    /// `order_by` is outside `-1 | 0 | 1`.
    #[serde(rename = "ErrorBadOrderBy")]
    BadOrderBy,
}

impl ErrorCode {
    /// Wire name of the code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadOrderField => "ErrorBadOrderField",
            Self::BadOrderBy => "ErrorBadOrderBy",
        }
    }
}

/// Reasons a search request is rejected before or while it runs.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The shared-secret header was absent or empty.
    #[error("missing access token")]
    Unauthorized,
    /// The requested sort field is not one of the supported fields.
    #[error("unsupported order_field {value:?}")]
    BadOrderField {
        /// Value received from the client.
        value: String,
    },
    /// The requested sort direction is not -1, 0 or 1.
    #[error("unsupported order_by {value}")]
    BadOrderBy {
        /// Value received from the client.
        value: i64,
    },
    /// A parameter is missing or malformed and has no dedicated code.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Query parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// The record store could not be read.
    #[error("user store unavailable: {message}")]
    StoreUnavailable {
        /// Internal detail; never sent to clients.
        message: String,
    },
}

impl Error {
    /// Symbolic code for rejections that carry one.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::BadOrderField { .. } => Some(ErrorCode::BadOrderField),
            Self::BadOrderBy { .. } => Some(ErrorCode::BadOrderBy),
            Self::Unauthorized | Self::InvalidParameter { .. } | Self::StoreUnavailable { .. } => None,
        }
    }

    /// Convenience constructor for [`Error::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
