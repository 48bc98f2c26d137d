use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for favoriting a contest
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddFavoriteDto {
    #[serde(rename = "userEmail")]
    #[validate(email(message = "Invalid user email format"))]
    pub user_email: String,

    #[serde(rename = "contestId")]
    #[validate(length(min = 1, message = "Contest id must not be empty"))]
    pub contest_id: String,

    #[serde(rename = "ContestName", skip_serializing_if = "Option::is_none")]
    pub contest_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Response DTO for a stored favorite
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteResponseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "userEmail")]
    pub user_email: String,

    #[serde(rename = "contestId")]
    pub contest_id: String,

    #[serde(rename = "ContestName", skip_serializing_if = "Option::is_none")]
    pub contest_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
