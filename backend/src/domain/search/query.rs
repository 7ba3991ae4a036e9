//! Raw search parameters and their validated form.

use std::cmp::Ordering;

use pagination::Window;

use crate::domain::{Error, User};

/// Search parameters exactly as received, before validation.
///
/// Absent values are `None`; present values keep their original text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum number of records to return.
    pub limit: Option<String>,
    /// Number of matching records to skip.
    pub offset: Option<String>,
    /// Case-insensitive substring filter; empty disables filtering.
    pub query: Option<String>,
    /// Sort field name.
    pub order_field: Option<String>,
    /// Sort direction code.
    pub order_by: Option<String>,
}

/// Comparator used when a sort is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Numeric identifier.
    ById,
    /// Numeric age.
    ByAge,
    /// Lexicographic full name; also the default for an empty field.
    ByName,
}

impl SortKey {
    /// Map an `order_field` value onto a comparator.
    ///
    /// The empty string selects [`SortKey::ByName`]; unknown names yield
    /// `None`.
    ///
    /// # Examples
    /// ```
    /// use search_backend::domain::search::SortKey;
    ///
    /// assert_eq!(SortKey::from_order_field(""), Some(SortKey::ByName));
    /// assert_eq!(SortKey::from_order_field("age"), Some(SortKey::ByAge));
    /// assert_eq!(SortKey::from_order_field("xxx"), None);
    /// ```
    pub fn from_order_field(field: &str) -> Option<Self> {
        match field {
            "" | "name" => Some(Self::ByName),
            "id" => Some(Self::ById),
            "age" => Some(Self::ByAge),
            _ => None,
        }
    }

    /// Ascending comparison of two users under this key.
    pub fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            Self::ById => a.id().cmp(&b.id()),
            Self::ByAge => a.age().cmp(&b.age()),
            Self::ByName => a.name().cmp(b.name()),
        }
    }
}

/// Requested sort direction, encoded on the wire as -1, 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// `-1`: largest key first.
    Descending,
    /// `0`: keep filter order.
    Unordered,
    /// `1`: smallest key first.
    Ascending,
}

impl SortDirection {
    /// Decode the wire value; anything but -1, 0 or 1 yields `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Self::Descending),
            0 => Some(Self::Unordered),
            1 => Some(Self::Ascending),
            _ => None,
        }
    }
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Substring filter; empty means every record matches.
    pub text: String,
    /// Comparator applied when `direction` is not [`SortDirection::Unordered`].
    pub sort_key: SortKey,
    /// Sort direction.
    pub direction: SortDirection,
    /// Offset and limit applied after sorting.
    pub window: Window,
}

impl SearchQuery {
    /// Validate raw parameters.
    ///
    /// Checks run in the order `limit`, `offset`, `order_by`, `order_field`;
    /// the first failure wins. A negative limit is accepted and produces an
    /// empty result; a negative offset is rejected.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] when `limit`, `offset` or `order_by` is
    ///   missing or not an integer, or `offset` is negative.
    /// - [`Error::BadOrderBy`] when `order_by` is not -1, 0 or 1.
    /// - [`Error::BadOrderField`] when `order_field` is not a known field.
    ///
    /// # Examples
    /// ```
    /// use search_backend::domain::search::{SearchParams, SearchQuery, SortDirection};
    ///
    /// let params = SearchParams {
    ///     limit: Some("5".into()),
    ///     offset: Some("0".into()),
    ///     order_by: Some("-1".into()),
    ///     ..SearchParams::default()
    /// };
    /// let query = SearchQuery::parse(&params).expect("valid query");
    /// assert_eq!(query.direction, SortDirection::Descending);
    /// assert_eq!(query.window.limit, 5);
    /// ```
    pub fn parse(params: &SearchParams) -> Result<Self, Error> {
        let limit = parse_integer("limit", params.limit.as_deref())?;
        let offset = parse_integer("offset", params.offset.as_deref())?;
        let offset = usize::try_from(offset)
            .map_err(|_| Error::invalid_parameter("offset", "must not be negative"))?;

        let order_by = parse_integer("order_by", params.order_by.as_deref())?;
        let direction =
            SortDirection::from_code(order_by).ok_or(Error::BadOrderBy { value: order_by })?;

        let order_field = params.order_field.as_deref().unwrap_or_default();
        let sort_key = SortKey::from_order_field(order_field).ok_or_else(|| Error::BadOrderField {
            value: order_field.to_owned(),
        })?;

        // Non-positive limits select nothing rather than failing.
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(Self {
            text: params.query.clone().unwrap_or_default(),
            sort_key,
            direction,
            window: Window::new(offset, limit),
        })
    }
}

fn parse_integer(name: &'static str, raw: Option<&str>) -> Result<i64, Error> {
    let raw = raw.ok_or_else(|| Error::invalid_parameter(name, "missing"))?;
    raw.parse::<i64>()
        .map_err(|err| Error::invalid_parameter(name, format!("expected an integer: {err}")))
}
