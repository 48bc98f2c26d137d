use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for creating a contest
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateContestDto {
    #[serde(rename = "ContestName", skip_serializing_if = "Option::is_none")]
    pub contest_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(rename = "CreatorEmail")]
    #[validate(email(message = "Invalid creator email format"))]
    pub creator_email: String,

    #[serde(rename = "Category")]
    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: String,

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

/// Request DTO for appending one comment to a contest
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AppendCommentDto {
    /// Contest id the comment is appended to
    #[validate(length(min = 1, message = "Contest id must not be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "Comment must not be empty"))]
    pub comment: String,
}

/// Request DTO for the participant-count route.
///
/// The stored count is replaced with `addCount`; nothing is added to it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCountDto {
    #[serde(rename = "addCount")]
    pub add_count: i64,
}

/// Response DTO for a stored contest
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContestResponseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "ContestName", skip_serializing_if = "Option::is_none")]
    pub contest_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(rename = "CreatorEmail")]
    pub creator_email: String,

    #[serde(rename = "Category")]
    pub category: String,

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

    pub status: String,

    #[serde(rename = "participantsCount")]
    pub participants_count: i64,

    pub comment: Vec<String>,
}
