use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Price as clients actually send it: a JSON number or a decimal string
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

/// Request DTO for creating a payment intent
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentIntentDto {
    /// Price in whole currency units; converted to minor units server-side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceInput>,
}

/// Response DTO carrying the client-usable payment secret
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponseDto {
    pub client_secret: String,
}
