//! Search use-case: query validation and the filter, sort and window
//! pipeline over the immutable user sequence.
//!
//! Validation runs against raw parameter text so that the domain, not the
//! transport, decides what counts as malformed. Nothing here assumes the
//! client already checked its input.

mod pipeline;
mod query;

pub use pipeline::{filter_users, run_pipeline, sort_users};
pub use query::{SearchParams, SearchQuery, SortDirection, SortKey};
