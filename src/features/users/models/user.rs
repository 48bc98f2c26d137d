use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::features::users::dtos::UserResponseDto;

/// Stored user document, logically keyed by email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Milliseconds since epoch, written on upsert and on role updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.map(|oid| oid.to_hex()),
            email: u.email,
            name: u.name,
            role: u.role,
            status: u.status,
            timestamp: u.timestamp,
        }
    }
}
