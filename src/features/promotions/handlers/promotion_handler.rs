use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::promotions::dtos::PromotionResponseDto;
use crate::features::promotions::services::PromotionService;
use crate::shared::types::ApiResponse;

/// List all promotion banners
#[utoipa::path(
    get,
    path = "/promotion",
    responses(
        (status = 200, description = "List of promotions", body = ApiResponse<Vec<PromotionResponseDto>>)
    ),
    tag = "promotions"
)]
pub async fn list_promotions(
    State(service): State<Arc<PromotionService>>,
) -> Result<Json<ApiResponse<Vec<PromotionResponseDto>>>> {
    let promotions = service.list().await?;
    Ok(Json(ApiResponse::success(Some(promotions), None, None)))
}
