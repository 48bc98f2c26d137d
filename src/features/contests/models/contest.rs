use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::features::contests::dtos::ContestResponseDto;
use crate::shared::constants::STATUS_PENDING;

/// Stored contest document.
///
/// Wire field names are kept exactly as the frontend sends them, which is
/// why the casing is mixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

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

    /// "pending" until an administrator approves
    #[serde(default = "default_status")]
    pub status: String,

    /// Overwritten wholesale by the count-update route
    #[serde(rename = "participantsCount", default)]
    pub participants_count: i64,

    /// Ordered; appends only
    #[serde(default)]
    pub comment: Vec<String>,
}

fn default_status() -> String {
    STATUS_PENDING.to_string()
}

impl From<Contest> for ContestResponseDto {
    fn from(c: Contest) -> Self {
        Self {
            id: c.id.map(|oid| oid.to_hex()),
            contest_name: c.contest_name,
            image: c.image,
            creator_email: c.creator_email,
            category: c.category,
            description: c.description,
            price: c.price,
            prize_money: c.prize_money,
            task_submission: c.task_submission,
            deadline: c.deadline,
            status: c.status,
            participants_count: c.participants_count,
            comment: c.comment,
        }
    }
}
