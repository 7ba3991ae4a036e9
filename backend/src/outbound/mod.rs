//! Outbound adapters implementing domain ports.
//!
//! - **dataset**: the static JSON dataset behind [`crate::domain::ports::UserStore`].
//!
//! Adapters translate infrastructure representations into domain types and
//! contain no search logic.

pub mod dataset;
