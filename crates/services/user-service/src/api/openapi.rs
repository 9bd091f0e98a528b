//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::health_handler::HealthResponse;
use domain::UserResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::user_handler::list_users,
        crate::api::handlers::health_handler::health_check,
    ),
    components(schemas(UserResponse, HealthResponse)),
    tags(
        (name = "Users", description = "User listing endpoints"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
