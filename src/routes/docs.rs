use axum::Json;
use utoipa::OpenApi;

use crate::dto::{
    conversion_dto::{ConversionHistoryResponse, ConvertPayload, ConvertResponse},
    user_dto::{AddUserPayload, MessageResponse, UserResponse},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::users::add_user,
        crate::routes::users::list_users,
        crate::routes::conversion::convert,
        crate::routes::conversion::conversion_history,
        crate::routes::health::health,
    ),
    components(schemas(
        AddUserPayload,
        MessageResponse,
        UserResponse,
        ConvertPayload,
        ConvertResponse,
        ConversionHistoryResponse,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
