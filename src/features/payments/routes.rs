use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::payments::handlers;
use crate::features::payments::services::PaymentService;

/// Mutating routes for payments (caller layers the session guard)
pub fn routes(service: Arc<PaymentService>) -> Router {
    Router::new()
        .route(
            "/create-payment-intent",
            post(handlers::create_payment_intent),
        )
        .with_state(service)
}
