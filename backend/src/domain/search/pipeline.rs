//! Filter, sort and window stages.
//!
//! Stages run in that order and never mutate the store's sequence; each
//! request works on its own clones.

use crate::domain::User;

use super::query::{SearchQuery, SortDirection, SortKey};

/// Keep users whose name or biography contains `text`, ignoring case.
///
/// An empty `text` keeps everyone. Input order is preserved.
pub fn filter_users(users: &[User], text: &str) -> Vec<User> {
    if text.is_empty() {
        return users.to_vec();
    }
    let needle = text.to_lowercase();
    users
        .iter()
        .filter(|user| {
            user.name().to_lowercase().contains(&needle)
                || user.about().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort by `key` in `direction`.
///
/// Equal keys keep their incoming relative order in both directions.
pub fn sort_users(mut users: Vec<User>, key: SortKey, direction: SortDirection) -> Vec<User> {
    match direction {
        SortDirection::Unordered => {}
        SortDirection::Ascending => users.sort_by(|a, b| key.compare(a, b)),
        SortDirection::Descending => users.sort_by(|a, b| key.compare(b, a)),
    }
    users
}

/// Run the full pipeline for one validated query.
///
/// # Examples
/// ```
/// use pagination::Window;
/// use search_backend::domain::User;
/// use search_backend::domain::search::{run_pipeline, SearchQuery, SortDirection, SortKey};
/// use user_dataset::Gender;
///
/// let users = vec![
///     User::new(1, "Boyd Wolf", 22, "", Gender::Male),
///     User::new(2, "Hilda Mayer", 21, "", Gender::Female),
/// ];
/// let query = SearchQuery {
///     text: String::new(),
///     sort_key: SortKey::ByAge,
///     direction: SortDirection::Ascending,
///     window: Window::new(0, 1),
/// };
/// let page = run_pipeline(&users, &query);
/// assert_eq!(page[0].name(), "Hilda Mayer");
/// ```
pub fn run_pipeline(users: &[User], query: &SearchQuery) -> Vec<User> {
    let filtered = filter_users(users, &query.text);
    let sorted = sort_users(filtered, query.sort_key, query.direction);
    query.window.apply(sorted)
}
