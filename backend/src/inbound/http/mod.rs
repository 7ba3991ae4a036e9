//! HTTP inbound adapter exposing the search endpoint and health probes.

pub mod auth;
pub mod cache_control;
pub mod error;
pub mod health;
pub mod schemas;
pub mod search;
pub mod state;

pub use error::ApiResult;

use actix_web::{Scope, web};

/// Path prefix shared by every versioned API route.
pub const API_PREFIX: &str = "/api/v1";

/// Build the versioned API scope holding the search endpoint.
///
/// Callers register [`state::HttpState`] as app data alongside it.
pub fn api_scope() -> Scope {
    web::scope(API_PREFIX).service(search::search_users)
}
