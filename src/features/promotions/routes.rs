use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::promotions::handlers;
use crate::features::promotions::services::PromotionService;

/// Create routes for the promotions feature
///
/// Read-only and public; promotions are seeded outside this service.
pub fn routes(service: Arc<PromotionService>) -> Router {
    Router::new()
        .route("/promotion", get(handlers::list_promotions))
        .with_state(service)
}
