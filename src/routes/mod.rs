pub mod conversion;
pub mod docs;
pub mod health;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{middleware::cors::open_cors, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .route("/add_user", post(users::add_user))
        .route("/users", get(users::list_users))
        .route("/convert", post(conversion::convert))
        .route("/conversion_history", get(conversion::conversion_history))
        .with_state(state)
        .layer(open_cors())
        .layer(TraceLayer::new_for_http())
}
