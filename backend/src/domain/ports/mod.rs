//! Domain ports for the hexagonal boundary.
//!
//! - [`UserStore`] is the driven port over the once-loaded record sequence.
//! - [`UserSearchQuery`] is the driving port HTTP handlers call.

mod user_search_query;
mod user_store;

#[cfg(test)]
pub use user_search_query::MockUserSearchQuery;
pub use user_search_query::UserSearchQuery;
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{UserStore, UserStoreError};
