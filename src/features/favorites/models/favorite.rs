use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::features::favorites::dtos::FavoriteResponseDto;

/// Stored favorite: a (user, contest) pairing.
///
/// Neither side is checked against its own collection; a favorite can
/// outlive the contest it points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(rename = "userEmail")]
    pub user_email: String,

    #[serde(rename = "contestId")]
    pub contest_id: String,

    #[serde(rename = "ContestName", skip_serializing_if = "Option::is_none")]
    pub contest_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<Favorite> for FavoriteResponseDto {
    fn from(f: Favorite) -> Self {
        Self {
            id: f.id.map(|oid| oid.to_hex()),
            user_email: f.user_email,
            contest_id: f.contest_id,
            contest_name: f.contest_name,
            image: f.image,
        }
    }
}
