//! Offset/limit pagination primitives.
//!
//! The search service keeps no cursor state. A caller that wants to know
//! whether another page exists asks for one record more than it intends to
//! show ([`lookahead_limit`]) and trims the response locally
//! ([`Page::from_lookahead`]). The server side only ever applies a plain
//! [`Window`].
//!
//! # Example
//!
//! ```
//! use pagination::{Page, Window, lookahead_limit};
//!
//! let window = Window::new(0, lookahead_limit(2));
//! let fetched = window.apply(vec!["a", "b", "c", "d"]);
//! let page = Page::from_lookahead(fetched, 2);
//!
//! assert_eq!(page.items, vec!["a", "b"]);
//! assert!(page.has_more);
//! ```

mod page;
mod window;

pub use page::{Page, lookahead_limit};
pub use window::{Window, WindowError};
