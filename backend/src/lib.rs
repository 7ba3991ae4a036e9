//! User search service: a fixed in-memory user collection behind one
//! authenticated query endpoint.
//!
//! - [`domain`] holds the records, query validation and the filter, sort and
//!   window pipeline.
//! - [`inbound`] exposes the pipeline over HTTP with Actix Web.
//! - [`outbound`] loads the static dataset into the user store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
