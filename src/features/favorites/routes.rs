use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::favorites::handlers;
use crate::features::favorites::services::FavoriteService;

/// Read routes for favorites (public)
pub fn public_routes(service: Arc<FavoriteService>) -> Router {
    Router::new()
        .route("/favorite", get(handlers::list_favorites))
        .with_state(service)
}

/// Mutating routes for favorites (caller layers the session guard)
pub fn protected_routes(service: Arc<FavoriteService>) -> Router {
    Router::new()
        .route("/addFavorite", put(handlers::add_favorite))
        .with_state(service)
}
