//! Driving port for the search use-case.
//!
//! Inbound adapters hand over raw parameters and receive either the result
//! page or a domain [`Error`]; validation and ordering live behind the port.

use async_trait::async_trait;

use crate::domain::search::SearchParams;
use crate::domain::{Error, User};

/// Domain use-case port for searching users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSearchQuery: Send + Sync {
    /// Load records, validate `params`, then filter, sort and window.
    async fn search(&self, params: &SearchParams) -> Result<Vec<User>, Error>;
}
