//! CORS policy built from `[server.cors]`.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use folderhub_core::config::CorsConfig;

const WILDCARD: &str = "*";

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == WILDCARD)
}

/// Entries that fail to parse are skipped.
fn parse_all<T: std::str::FromStr>(values: &[String]) -> Vec<T> {
    values.iter().filter_map(|v| v.parse().ok()).collect()
}

fn origin_policy(config: &CorsConfig) -> AllowOrigin {
    if is_wildcard(&config.allowed_origins) {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_all::<HeaderValue>(&config.allowed_origins))
    }
}

fn header_policy(config: &CorsConfig) -> AllowHeaders {
    if is_wildcard(&config.allowed_headers) {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(parse_all::<HeaderName>(&config.allowed_headers))
    }
}

/// Builds the CORS layer wrapped around the whole app.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin_policy(config))
        .allow_methods(parse_all::<Method>(&config.allowed_methods))
        .allow_headers(header_policy(config))
        .max_age(Duration::from_secs(config.max_age_seconds))
}
