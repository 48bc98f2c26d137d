use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, put},
    Router,
};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Read routes for users (public)
pub fn public_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/users", get(handlers::list_users))
        .route("/user/{email}", get(handlers::get_user))
        .with_state(service)
}

/// Mutating routes for users (caller layers the session guard)
pub fn protected_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/user", put(handlers::upsert_user))
        .route("/users/update", patch(handlers::update_user_role))
        .route("/delete/user/{email}", delete(handlers::delete_user))
        .with_state(service)
}
