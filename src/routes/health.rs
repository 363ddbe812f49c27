use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{error::Result, AppState};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database reachable"),
        (status = 500, description = "Database unreachable")
    )
)]
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse> {
    sqlx::query("SELECT 1").execute(&state.pool).await?;
    let body = json!({
        "status": "ok",
    });
    Ok((StatusCode::OK, Json(body)))
}
