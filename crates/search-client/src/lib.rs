//! Typed client for the user search API.
//!
//! [`SearchClient::find_users`] rejects negative windows before touching the
//! network, asks the server for one record more than the caller wants, and
//! trims the surplus locally to report [`SearchResult::next_page`]. Every
//! failure is classified into a [`SearchError`] variant.
//!
//! # Example
//!
//! ```no_run
//! use search_client::{OrderDirection, OrderField, SearchClient, SearchClientConfig, SearchQuery};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SearchClient::new(SearchClientConfig::new(
//!     "http://127.0.0.1:8080/api/v1/search",
//!     "secret",
//! ))?;
//! let query = SearchQuery::new(10, 0)
//!     .with_text("nn")
//!     .with_order(OrderField::Age, OrderDirection::Ascending);
//! let result = client.find_users(&query).await?;
//! println!("{} users, more: {}", result.users.len(), result.next_page);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod dto;
mod error;
mod query;

pub use client::{ACCESS_TOKEN_HEADER, SearchClient, SearchResult};
pub use config::{DEFAULT_TIMEOUT, SearchClientConfig};
pub use dto::{Gender, User};
pub use error::{BadRequestCode, ClientBuildError, SearchError};
pub use query::{OrderDirection, OrderField, SearchQuery};
