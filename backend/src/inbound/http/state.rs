//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! port, so they stay testable without a dataset on disk.

use std::sync::Arc;

use crate::domain::ports::UserSearchQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Search use-case.
    pub users: Arc<dyn UserSearchQuery>,
}

impl HttpState {
    /// Bundle the search port.
    pub fn new(users: Arc<dyn UserSearchQuery>) -> Self {
        Self { users }
    }
}
