//! Cache-control policies shared by HTTP handlers.

/// Search results depend on the caller's credential and must not be reused.
pub const PRIVATE_NO_STORE: &str = "private, no-store";

/// Probe responses must never be cached by intermediaries.
pub const NO_STORE: &str = "no-store";

/// Header tuple for search responses.
pub const fn private_no_store_header() -> (&'static str, &'static str) {
    ("Cache-Control", PRIVATE_NO_STORE)
}
