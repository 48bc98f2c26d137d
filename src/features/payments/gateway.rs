use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::StripeConfig;
use crate::core::error::{AppError, Result};

/// A created payment intent: the id for reconciliation and the secret the
/// client completes payment with
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Seam to the external payment provider.
///
/// The service talks to this trait so tests can count calls; `StripeClient`
/// is the one production implementation.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment intent for an amount in minor currency units
    async fn create_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent>;
}

/// Response from Stripe's payment-intent endpoint
#[derive(Debug, Deserialize)]
struct StripeIntentResponse {
    id: String,
    client_secret: String,
}

/// `PaymentGateway` over Stripe's HTTPS API
pub struct StripeClient {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl StripeClient {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base_url,
            secret_key: config.secret_key,
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn create_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.base_url);

        tracing::debug!("Creating payment intent: amount={}, currency={}", amount, currency);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&[
                ("amount", amount.to_string()),
                ("currency", currency.to_string()),
                ("automatic_payment_methods[enabled]", "true".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Payment intent request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Payment intent request failed: HTTP {} - {}",
                status, body
            )));
        }

        let parsed: StripeIntentResponse = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to parse payment intent response: {}", e))
        })?;

        let intent = PaymentIntent {
            id: parsed.id,
            client_secret: parsed.client_secret,
        };

        tracing::info!("Payment intent created: id={}", intent.id);

        Ok(intent)
    }
}
