//! HTTP layer - handlers, routes and OpenAPI documentation.

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
