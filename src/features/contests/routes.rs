use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::features::contests::handlers;
use crate::features::contests::services::ContestService;

/// Read routes for contests (public)
pub fn public_routes(service: Arc<ContestService>) -> Router {
    Router::new()
        .route("/AllContest", get(handlers::list_contests))
        .route("/AllContest/{search}", get(handlers::search_contests))
        .route("/AllContest/id/{id}", get(handlers::get_contest_by_id))
        .route(
            "/MyCreatedContest/{email}",
            get(handlers::list_created_contests),
        )
        .with_state(service)
}

/// Mutating routes for contests (caller layers the session guard)
pub fn protected_routes(service: Arc<ContestService>) -> Router {
    Router::new()
        .route("/AddContest", post(handlers::add_contest))
        .route("/comment", put(handlers::append_comment))
        .route("/status/update/{id}", patch(handlers::approve_contest))
        .route(
            "/count/update/{id}",
            patch(handlers::update_participant_count),
        )
        .route("/delete/{id}", delete(handlers::delete_contest))
        .with_state(service)
}
