//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their wire
//! shape so utoipa can document them from the adapter layer.

use utoipa::ToSchema;

/// OpenAPI schema for [`user_dataset::Gender`].
#[derive(ToSchema)]
#[schema(as = Gender)]
pub enum GenderSchema {
    /// Male.
    #[schema(rename = "male")]
    Male,
    /// Female.
    #[schema(rename = "female")]
    Female,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Stable unique identifier.
    #[schema(example = 0)]
    id: u32,
    /// Given and family name joined by one space.
    #[schema(example = "Boyd Wolf")]
    name: String,
    /// Age in whole years.
    #[schema(example = 22)]
    age: u32,
    /// Free-text biography.
    about: String,
    /// Recorded gender.
    gender: GenderSchema,
}

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// `order_field` is not one of `""`, `id`, `age`, `name`.
    #[schema(rename = "ErrorBadOrderField")]
    BadOrderField,
    /// `order_by` is not one of -1, 0, 1.
    #[schema(rename = "ErrorBadOrderBy")]
    BadOrderBy,
}

/// OpenAPI schema for [`super::error::ErrorBody`].
#[derive(ToSchema)]
#[schema(as = ErrorBody)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorBodySchema {
    /// Symbolic code naming the rejected field.
    error: ErrorCodeSchema,
    /// Human-readable explanation.
    #[schema(example = "unsupported order_field \"xxx\"")]
    message: String,
}
