use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO for a promotion banner
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromotionResponseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
