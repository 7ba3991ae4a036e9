//! Look-ahead page envelope.

use serde::{Deserialize, Serialize};

/// Limit to request so that one surplus item reveals whether more exist.
///
/// # Examples
/// ```
/// assert_eq!(pagination::lookahead_limit(5), 6);
/// assert_eq!(pagination::lookahead_limit(usize::MAX), usize::MAX);
/// ```
#[must_use]
pub const fn lookahead_limit(limit: usize) -> usize {
    limit.saturating_add(1)
}

/// One page of results plus a flag telling whether more items follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in response order.
    pub items: Vec<T>,
    /// `true` when at least one item exists beyond this page.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Build a page from a response fetched with [`lookahead_limit`].
    ///
    /// Keeps the first `limit` items and sets [`Page::has_more`] iff strictly
    /// more than `limit` items were fetched.
    #[must_use]
    pub fn from_lookahead(mut items: Vec<T>, limit: usize) -> Self {
        let has_more = items.len() > limit;
        items.truncate(limit);
        Self { items, has_more }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::surplus_present(6, 5, 5, true)]
    #[case::exactly_limit(5, 5, 5, false)]
    #[case::short_page(3, 5, 3, false)]
    #[case::empty(0, 5, 0, false)]
    #[case::zero_limit_with_surplus(1, 0, 0, true)]
    fn trims_and_flags(
        #[case] fetched: usize,
        #[case] limit: usize,
        #[case] expected_len: usize,
        #[case] expected_more: bool,
    ) {
        let page = Page::from_lookahead((0..fetched).collect::<Vec<_>>(), limit);
        assert_eq!(page.items.len(), expected_len);
        assert_eq!(page.has_more, expected_more);
    }

    #[rstest]
    fn keeps_leading_items_in_order() {
        let page = Page::from_lookahead(vec!['a', 'b', 'c'], 2);
        assert_eq!(page.items, vec!['a', 'b']);
    }

    #[rstest]
    fn serialises_with_camel_case_flag() {
        let page = Page::from_lookahead(vec![1_u8], 1);
        let value = serde_json::to_value(&page).unwrap_or_default();
        assert_eq!(value, serde_json::json!({ "items": [1], "hasMore": false }));
    }
}
