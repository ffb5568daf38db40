//! Application builder: router, middleware and state wired into one Axum app.

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
