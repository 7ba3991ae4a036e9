//! Domain primitives, the search use-case and its ports.
//!
//! Public surface:
//! - [`User`]: immutable record served by the search endpoint.
//! - [`Error`] / [`ErrorCode`]: rejection reasons and their wire codes.
//! - [`search`]: parameter validation and the filter/sort/window pipeline.
//! - [`ports`]: [`ports::UserStore`] and [`ports::UserSearchQuery`].
//! - [`UserSearchService`]: the use-case behind the driving port.

pub mod error;
pub mod ports;
pub mod search;
pub mod trace_id;
pub mod user;
mod user_search_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;
pub use self::user::User;
pub use self::user_search_service::UserSearchService;
