use axum::http::Method;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Open policy for the browser front end: any origin may call every endpoint.
pub fn open_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}
