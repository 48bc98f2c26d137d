use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for issuing a session token
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct IssueTokenDto {
    /// Email the session is issued for
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Optional role claim carried into the session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
