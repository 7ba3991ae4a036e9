//! Typed search query and its wire encoding.

/// Field to order results by.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OrderField {
    /// Empty `order_field`; the server orders by name when a direction is set.
    #[default]
    Unordered,
    /// Order by numeric identifier.
    Id,
    /// Order by age.
    Age,
    /// Order by full name.
    Name,
    /// Any other value, forwarded verbatim for the server to judge.
    Other(String),
}

impl OrderField {
    /// Value sent as the `order_field` parameter.
    #[must_use]
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Unordered => "",
            Self::Id => "id",
            Self::Age => "age",
            Self::Name => "name",
            Self::Other(raw) => raw,
        }
    }
}

/// Sort direction, encoded as `-1`, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// `-1`.
    Descending,
    /// `0`: keep dataset order.
    #[default]
    Unordered,
    /// `1`.
    Ascending,
    /// Any other code, forwarded verbatim for the server to judge.
    Other(i64),
}

impl OrderDirection {
    /// Value sent as the `order_by` parameter.
    #[must_use]
    pub const fn as_wire(self) -> i64 {
        match self {
            Self::Descending => -1,
            Self::Unordered => 0,
            Self::Ascending => 1,
            Self::Other(code) => code,
        }
    }
}

/// Parameters for one [`crate::SearchClient::find_users`] call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    /// Maximum number of users to return. Must not be negative.
    pub limit: i64,
    /// Number of matching users to skip. Must not be negative.
    pub offset: i64,
    /// Case-insensitive substring matched against name and biography.
    pub text: String,
    /// Field to order by.
    pub order_field: OrderField,
    /// Direction to order in.
    pub order_by: OrderDirection,
}

impl SearchQuery {
    /// Unfiltered, unordered query for the given window.
    #[must_use]
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset,
            ..Self::default()
        }
    }

    /// Restrict results to users whose name or biography contains `text`.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the ordering.
    #[must_use]
    pub fn with_order(mut self, field: OrderField, direction: OrderDirection) -> Self {
        self.order_field = field;
        self.order_by = direction;
        self
    }

    /// Encode as query parameters, sending `request_limit` in place of
    /// [`Self::limit`].
    pub(crate) fn to_params(&self, request_limit: usize) -> [(&'static str, String); 5] {
        [
            ("limit", request_limit.to_string()),
            ("offset", self.offset.to_string()),
            ("query", self.text.clone()),
            ("order_field", self.order_field.as_wire().to_owned()),
            ("order_by", self.order_by.as_wire().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OrderField::Unordered, "")]
    #[case(OrderField::Id, "id")]
    #[case(OrderField::Age, "age")]
    #[case(OrderField::Name, "name")]
    #[case(OrderField::Other("xxx".to_owned()), "xxx")]
    fn order_field_wire_values(#[case] field: OrderField, #[case] wire: &str) {
        assert_eq!(field.as_wire(), wire);
    }

    #[rstest]
    #[case(OrderDirection::Descending, -1)]
    #[case(OrderDirection::Unordered, 0)]
    #[case(OrderDirection::Ascending, 1)]
    #[case(OrderDirection::Other(2), 2)]
    fn order_direction_wire_values(#[case] direction: OrderDirection, #[case] wire: i64) {
        assert_eq!(direction.as_wire(), wire);
    }

    #[test]
    fn params_carry_every_field_with_the_request_limit() {
        let query = SearchQuery::new(5, 10)
            .with_text("nn")
            .with_order(OrderField::Age, OrderDirection::Descending);

        let params = query.to_params(6);

        assert_eq!(
            params,
            [
                ("limit", "6".to_owned()),
                ("offset", "10".to_owned()),
                ("query", "nn".to_owned()),
                ("order_field", "age".to_owned()),
                ("order_by", "-1".to_owned()),
            ]
        );
    }
}
