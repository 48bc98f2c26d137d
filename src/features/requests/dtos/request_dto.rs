use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for submitting a contest for creator review.
///
/// Carries the same descriptive fields a contest does; nothing on this
/// surface reads the stored document back.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRequestDto {
    #[serde(rename = "ContestName", skip_serializing_if = "Option::is_none")]
    pub contest_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(rename = "CreatorEmail")]
    #[validate(email(message = "Invalid creator email format"))]
    pub creator_email: String,

    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(rename = "prizeMoney", skip_serializing_if = "Option::is_none")]
    pub prize_money: Option<f64>,

    #[serde(rename = "taskSubmission", skip_serializing_if = "Option::is_none")]
    pub task_submission: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}
