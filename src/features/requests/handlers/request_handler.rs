use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::store::InsertSummary;
use crate::features::requests::dtos::CreateRequestDto;
use crate::features::requests::services::RequestService;
use crate::shared::types::ApiResponse;

/// Submit a contest for creator review
#[utoipa::path(
    post,
    path = "/AddRequest",
    request_body = CreateRequestDto,
    responses(
        (status = 200, description = "Insert acknowledgement", body = ApiResponse<InsertSummary>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid session cookie")
    ),
    security(("session_cookie" = [])),
    tag = "requests"
)]
pub async fn add_request(
    State(service): State<Arc<RequestService>>,
    AppJson(dto): AppJson<CreateRequestDto>,
) -> Result<Json<ApiResponse<InsertSummary>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let summary = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}
