//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Records Server",
        version = "0.1.0",
        description = "CRUD API over the integra_partners.users table"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // User endpoints
        api::users::list_users,
        api::users::create_user,
        api::users::update_user,
        api::users::delete_user,
    ),
    components(
        schemas(
            api::health::HealthResponse,
            api::health::ReadyResponse,
            models::User,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User record management")
    )
)]
pub struct ApiDoc;
