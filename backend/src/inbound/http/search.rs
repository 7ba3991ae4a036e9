//! Search API handler.
//!
//! ```text
//! GET /api/v1/search?limit=5&offset=0&query=&order_field=age&order_by=1
//! AccessToken: <shared secret>
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::search::SearchParams;
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AccessToken;
use crate::inbound::http::cache_control::private_no_store_header;
use crate::inbound::http::schemas::{ErrorBodySchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Query string of `GET /api/v1/search`.
///
/// Values stay textual here; the domain decides what is malformed.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchRequestQuery {
    /// Maximum number of records to return; non-positive returns none.
    #[param(value_type = Option<i64>, example = 5)]
    pub limit: Option<String>,
    /// Number of matching records to skip; must not be negative.
    #[param(value_type = Option<i64>, example = 0)]
    pub offset: Option<String>,
    /// Case-insensitive substring matched against name and biography.
    pub query: Option<String>,
    /// One of `""`, `id`, `age`, `name`; empty sorts by name.
    pub order_field: Option<String>,
    /// -1 descending, 0 unsorted, 1 ascending.
    #[param(value_type = Option<i64>, example = 0)]
    pub order_by: Option<String>,
}

impl From<SearchRequestQuery> for SearchParams {
    fn from(value: SearchRequestQuery) -> Self {
        Self {
            limit: value.limit,
            offset: value.offset,
            query: value.query,
            order_field: value.order_field,
            order_by: value.order_by,
        }
    }
}

/// Search users.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use search_backend::inbound::http::search::search_users;
///
/// let app = App::new().service(web::scope("/api/v1").service(search_users));
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/search",
    params(SearchRequestQuery),
    responses(
        (status = 200, description = "Matching users", body = [UserSchema]),
        (status = 400, description = "Rejected order_field or order_by", body = ErrorBodySchema),
        (status = 401, description = "Missing access token"),
        (status = 500, description = "User store unavailable")
    ),
    tags = ["search"],
    operation_id = "searchUsers"
)]
#[get("/search")]
pub async fn search_users(
    _token: AccessToken,
    state: web::Data<HttpState>,
    query: web::Query<SearchRequestQuery>,
) -> ApiResult<HttpResponse> {
    let params = SearchParams::from(query.into_inner());
    let users = state.users.search(&params).await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_store_header())
        .json(users))
}
