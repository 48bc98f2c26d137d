use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::features::bookings::dtos::BookingResponseDto;

/// Stored booking document: one user's entry into one contest.
///
/// Bookings are never deleted; `result` stays unset until the creator picks
/// a winner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl From<Booking> for BookingResponseDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id.map(|oid| oid.to_hex()),
            contest_id: b.contest_id,
            contest_name: b.contest_name,
            register_email: b.register_email,
            creator_email: b.creator_email,
            deadline: b.deadline,
            price: b.price,
            payment_id: b.payment_id,
            result: b.result,
        }
    }
}
