//! Domain service implementing [`UserSearchQuery`] over a [`UserStore`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserSearchQuery, UserStore};
use crate::domain::search::{SearchParams, SearchQuery, run_pipeline};
use crate::domain::{Error, TraceId, User};

/// Search service holding no per-request state.
///
/// Steps run strictly in order: load records, validate parameters, then the
/// filter, sort and window pipeline. Authentication happens at the edge
/// before this service is reached.
#[derive(Clone)]
pub struct UserSearchService {
    store: Arc<dyn UserStore>,
}

impl UserSearchService {
    /// Create a service reading from `store`.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserSearchQuery for UserSearchService {
    async fn search(&self, params: &SearchParams) -> Result<Vec<User>, Error> {
        let users = self.store.load_all().await.map_err(|err| {
            error!(error = %err, trace_id = ?TraceId::current(), "user store failed");
            Error::StoreUnavailable {
                message: err.to_string(),
            }
        })?;

        let query = SearchQuery::parse(params)?;
        let page = run_pipeline(&users, &query);
        debug!(
            store_size = users.len(),
            returned = page.len(),
            offset = query.window.offset,
            limit = query.window.limit,
            "search completed"
        );
        Ok(page)
    }
}
