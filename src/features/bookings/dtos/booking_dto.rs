use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for submitting a contest entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBookingDto {
    #[serde(rename = "contestId", skip_serializing_if = "Option::is_none")]
    pub contest_id: Option<String>,

    #[serde(rename = "ContestName", skip_serializing_if = "Option::is_none")]
    pub contest_name: Option<String>,

    #[serde(rename = "RegisterEmail")]
    #[validate(email(message = "Invalid register email format"))]
    pub register_email: String,

    #[serde(rename = "CreatorEmail", skip_serializing_if = "Option::is_none")]
    pub creator_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Payment-intent id the entry was paid with, when payment happened
    #[serde(rename = "paymentId", skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

/// Response DTO for a stored booking
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingResponseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "contestId", skip_serializing_if = "Option::is_none")]
    pub contest_id: Option<String>,

    #[serde(rename = "ContestName", skip_serializing_if = "Option::is_none")]
    pub contest_name: Option<String>,

    #[serde(rename = "RegisterEmail")]
    pub register_email: String,

    #[serde(rename = "CreatorEmail", skip_serializing_if = "Option::is_none")]
    pub creator_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(rename = "paymentId", skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,

    /// `"winner"` once picked, absent otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}
