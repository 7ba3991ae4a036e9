//! OpenAPI documentation configuration.
//!
//! Registers the search and health paths, the schema wrappers from
//! [`crate::inbound::http::schemas`], and the `AccessToken` header scheme.
//! Served by Swagger UI in debug builds and printed by `openapi-dump`.

use crate::inbound::http::schemas::{ErrorBodySchema, ErrorCodeSchema, GenderSchema, UserSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the shared-secret header security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "AccessToken",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "AccessToken",
                "Shared secret; any non-empty value is accepted.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "User search API",
        description = "Offset/limit search over a static user collection.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("AccessToken" = [])),
    paths(
        crate::inbound::http::search::search_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, GenderSchema, ErrorBodySchema, ErrorCodeSchema)),
    tags(
        (name = "search", description = "User search"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;
