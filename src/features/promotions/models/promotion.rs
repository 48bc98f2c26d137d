use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::features::promotions::dtos::PromotionResponseDto;

/// Stored promotion banner; reference data with no write path here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Promotion> for PromotionResponseDto {
    fn from(p: Promotion) -> Self {
        Self {
            id: p.id.map(|oid| oid.to_hex()),
            title: p.title,
            image: p.image,
            description: p.description,
        }
    }
}
