use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::user_dto::{AddUserPayload, MessageResponse, UserResponse},
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/add_user",
    request_body = AddUserPayload,
    responses(
        (status = 201, description = "User added", body = MessageResponse),
        (status = 400, description = "Missing required fields")
    )
)]
#[axum::debug_handler]
pub async fn add_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddUserPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let (Some(first_name), Some(last_name)) = (payload.first_name, payload.last_name) else {
        return Err(Error::BadRequest("Missing required fields".into()));
    };

    state.user_service.create(&first_name, &last_name).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User successfully added".into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list().await?;
    let items: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(Json(items))
}
