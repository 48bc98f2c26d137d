use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::payments::dtos::{CreatePaymentIntentDto, PaymentIntentResponseDto};
use crate::features::payments::services::PaymentService;
use crate::shared::types::ApiResponse;

/// Create a payment intent and return its client secret
///
/// A missing or sub-cent price is a 400 and never reaches the payment
/// provider.
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Client secret for completing payment", body = ApiResponse<PaymentIntentResponseDto>),
        (status = 400, description = "Missing or invalid price"),
        (status = 401, description = "Missing or invalid session cookie"),
        (status = 502, description = "Payment provider failure")
    ),
    security(("session_cookie" = [])),
    tag = "payments"
)]
pub async fn create_payment_intent(
    State(service): State<Arc<PaymentService>>,
    AppJson(dto): AppJson<CreatePaymentIntentDto>,
) -> Result<Json<ApiResponse<PaymentIntentResponseDto>>> {
    let intent = service.create_intent(dto).await?;
    Ok(Json(ApiResponse::success(Some(intent), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::payments::routes;
    use crate::shared::test_helpers::RecordingGateway;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> (TestServer, Arc<RecordingGateway>) {
        let gateway = Arc::new(RecordingGateway::new());
        let service = Arc::new(PaymentService::new(
            Arc::clone(&gateway) as Arc<dyn crate::features::payments::gateway::PaymentGateway>
        ));
        (TestServer::new(routes::routes(service)).unwrap(), gateway)
    }

    #[tokio::test]
    async fn string_price_creates_an_intent_and_returns_the_secret() {
        let (server, gateway) = server();

        let response = server
            .post("/create-payment-intent")
            .json(&json!({ "price": "10.00" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert!(body["data"]["clientSecret"].as_str().unwrap().len() > 0);
        // The intent id stays server-side; only the secret crosses the wire
        let data = body["data"].as_object().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(gateway.calls(), vec![(1000, "usd".to_string())]);
    }

    #[tokio::test]
    async fn zero_price_is_a_400_with_no_gateway_call() {
        let (server, gateway) = server();

        let response = server
            .post("/create-payment-intent")
            .json(&json!({ "price": 0 }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(gateway.calls().len(), 0);
    }

    #[tokio::test]
    async fn empty_string_price_is_a_400_with_no_gateway_call() {
        let (server, gateway) = server();

        let response = server
            .post("/create-payment-intent")
            .json(&json!({ "price": "" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(gateway.calls().len(), 0);
    }
}
