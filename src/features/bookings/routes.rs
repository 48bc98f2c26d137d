use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::bookings::handlers;
use crate::features::bookings::services::BookingService;

/// Read routes for bookings (public)
pub fn public_routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route("/submittedContest", get(handlers::list_bookings))
        .route(
            "/participatedContest/{email}",
            get(handlers::list_participated),
        )
        .with_state(service)
}

/// Mutating routes for bookings (caller layers the session guard)
pub fn protected_routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route("/booking", post(handlers::create_booking))
        .route("/update/result/{id}", patch(handlers::mark_winner))
        .with_state(service)
}
