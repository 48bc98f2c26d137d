use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::payments::dtos::{
    CreatePaymentIntentDto, PaymentIntentResponseDto, PriceInput,
};
use crate::features::payments::gateway::PaymentGateway;
use crate::shared::constants::PAYMENT_CURRENCY;

/// Service converting a client price into a payment intent
pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Create a payment intent for the given price.
    ///
    /// The price is converted to minor units (cents). A missing,
    /// unparseable, or sub-cent price never reaches the gateway; the guard
    /// rejects it first.
    pub async fn create_intent(
        &self,
        dto: CreatePaymentIntentDto,
    ) -> Result<PaymentIntentResponseDto> {
        let amount = minor_units(dto.price.as_ref())?;

        let intent = self.gateway.create_intent(amount, PAYMENT_CURRENCY).await?;

        Ok(PaymentIntentResponseDto {
            client_secret: intent.client_secret,
        })
    }
}

/// Price in whole currency units to an integer amount of minor units
fn minor_units(price: Option<&PriceInput>) -> Result<i64> {
    let price = match price {
        Some(PriceInput::Number(n)) => *n,
        Some(PriceInput::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::Validation(format!("Invalid price: {}", s)))?,
        None => return Err(AppError::Validation("Price is required".to_string())),
    };

    let amount = (price * 100.0).round() as i64;
    if amount < 1 {
        return Err(AppError::Validation(
            "Price must amount to at least one cent".to_string(),
        ));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::RecordingGateway;

    fn service() -> (PaymentService, Arc<RecordingGateway>) {
        let gateway = Arc::new(RecordingGateway::new());
        (
            PaymentService::new(Arc::clone(&gateway) as Arc<dyn PaymentGateway>),
            gateway,
        )
    }

    fn dto(price: Option<PriceInput>) -> CreatePaymentIntentDto {
        CreatePaymentIntentDto { price }
    }

    #[tokio::test]
    async fn a_decimal_string_price_requests_exact_minor_units_in_usd() {
        let (payments, gateway) = service();

        let response = payments
            .create_intent(dto(Some(PriceInput::Text("10.00".to_string()))))
            .await
            .unwrap();

        assert!(!response.client_secret.is_empty());
        assert_eq!(gateway.calls(), vec![(1000, "usd".to_string())]);
    }

    #[tokio::test]
    async fn a_numeric_price_converts_the_same_way() {
        let (payments, gateway) = service();

        payments
            .create_intent(dto(Some(PriceInput::Number(2.5))))
            .await
            .unwrap();

        assert_eq!(gateway.calls(), vec![(250, "usd".to_string())]);
    }

    #[tokio::test]
    async fn zero_and_empty_prices_never_reach_the_gateway() {
        let (payments, gateway) = service();

        let zero = payments
            .create_intent(dto(Some(PriceInput::Number(0.0))))
            .await;
        assert!(matches!(zero, Err(AppError::Validation(_))));

        let empty = payments
            .create_intent(dto(Some(PriceInput::Text(String::new()))))
            .await;
        assert!(matches!(empty, Err(AppError::Validation(_))));

        let missing = payments.create_intent(dto(None)).await;
        assert!(matches!(missing, Err(AppError::Validation(_))));

        assert_eq!(gateway.calls().len(), 0);
    }

    #[tokio::test]
    async fn sub_cent_prices_are_rejected_before_the_gateway() {
        let (payments, gateway) = service();

        let err = payments
            .create_intent(dto(Some(PriceInput::Number(0.004))))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(gateway.calls().len(), 0);
    }

    #[tokio::test]
    async fn unparseable_price_text_is_rejected() {
        let (payments, gateway) = service();

        let err = payments
            .create_intent(dto(Some(PriceInput::Text("ten dollars".to_string()))))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(gateway.calls().len(), 0);
    }
}
