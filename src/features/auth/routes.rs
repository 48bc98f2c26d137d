use crate::features::auth::handlers;
use crate::features::auth::services::TokenService;
use axum::{routing::post, Router};
use std::sync::Arc;

/// Session bootstrap routes.
///
/// These stay public: establishing or clearing a session cannot itself
/// require a session.
pub fn routes(service: Arc<TokenService>) -> Router {
    Router::new()
        .route("/jwt", post(handlers::issue_token))
        .route("/logout", post(handlers::logout))
        .with_state(service)
}
