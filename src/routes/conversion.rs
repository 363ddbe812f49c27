use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::conversion_dto::{ConversionHistoryResponse, ConvertPayload, ConvertResponse},
    error::{Error, Result},
    services::conversion_service::HISTORY_LIMIT,
    AppState,
};

const MISSING_FIELDS: &str = "Missing required fields";

#[utoipa::path(
    post,
    path = "/convert",
    request_body = ConvertPayload,
    responses(
        (status = 200, description = "Converted amount", body = ConvertResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Rate provider failure")
    )
)]
#[axum::debug_handler]
pub async fn convert(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ConvertPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    // Field-level errors would name `from_currency`/`to_currency`, not the wire names.
    payload
        .validate()
        .map_err(|_| Error::BadRequest(MISSING_FIELDS.into()))?;
    let request = payload
        .into_request()
        .ok_or_else(|| Error::BadRequest(MISSING_FIELDS.into()))?;

    let row = state.conversion_service.convert(request).await?;
    Ok(Json(ConvertResponse {
        converted_amount: row.result,
    }))
}

#[utoipa::path(
    get,
    path = "/conversion_history",
    responses(
        (status = 200, description = "Ten most recent conversions, newest first", body = [ConversionHistoryResponse])
    )
)]
#[axum::debug_handler]
pub async fn conversion_history(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rows = state.conversion_service.recent(HISTORY_LIMIT).await?;
    let items: Vec<ConversionHistoryResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(items))
}
