use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::hello;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::types::ApiError;
use super::users;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .merge(health::create_health_router())
        // Hello world + item echo
        .merge(hello::create_hello_router())
        // User directory
        .merge(users::create_users_router())
        // Unknown paths and methods get the JSON error body too
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        // Add state and middleware
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> ApiError {
    ApiError::route_not_found()
}

async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
