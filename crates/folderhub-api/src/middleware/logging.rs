//! Access log for every request that reaches the router.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Emits one event per request; the level follows the status class.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let code = status.as_u16();
    if status.is_server_error() {
        tracing::error!(%method, %path, status = code, elapsed_ms, "request failed");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, status = code, elapsed_ms, "request rejected");
    } else {
        tracing::info!(%method, %path, status = code, elapsed_ms, "request served");
    }

    response
}
