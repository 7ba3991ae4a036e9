//! Driven port exposing the immutable user sequence.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::User;

/// Failure to produce the record sequence.
///
/// Never a client error: callers surface it as a server fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserStoreError {
    /// The backing source could not be read or parsed.
    #[error("user store unavailable: {message}")]
    Unavailable {
        /// What went wrong while reading the source.
        message: String,
    },
}

impl UserStoreError {
    /// Build a [`UserStoreError::Unavailable`] from any displayable detail.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Read-only access to every user record in load order.
///
/// Implementations load once and hand out shared references afterwards, so
/// concurrent readers need no locking.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Return the full record sequence.
    async fn load_all(&self) -> Result<Arc<[User]>, UserStoreError>;
}
