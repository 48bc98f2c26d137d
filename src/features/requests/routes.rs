use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::requests::handlers;
use crate::features::requests::services::RequestService;

/// Mutating routes for contest-review requests (caller layers the session
/// guard)
pub fn routes(service: Arc<RequestService>) -> Router {
    Router::new()
        .route("/AddRequest", post(handlers::add_request))
        .with_state(service)
}
