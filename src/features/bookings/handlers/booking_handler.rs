use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::store::{InsertSummary, UpdateSummary};
use crate::features::bookings::dtos::{BookingResponseDto, CreateBookingDto};
use crate::features::bookings::services::BookingService;
use crate::shared::types::ApiResponse;

/// List all submitted contest entries
#[utoipa::path(
    get,
    path = "/submittedContest",
    responses(
        (status = 200, description = "List of bookings", body = ApiResponse<Vec<BookingResponseDto>>)
    ),
    tag = "bookings"
)]
pub async fn list_bookings(
    State(service): State<Arc<BookingService>>,
) -> Result<Json<ApiResponse<Vec<BookingResponseDto>>>> {
    let bookings = service.list().await?;
    Ok(Json(ApiResponse::success(Some(bookings), None, None)))
}

/// List contests an email has entered
#[utoipa::path(
    get,
    path = "/participatedContest/{email}",
    params(
        ("email" = String, Path, description = "Registering email")
    ),
    responses(
        (status = 200, description = "Bookings by the email", body = ApiResponse<Vec<BookingResponseDto>>)
    ),
    tag = "bookings"
)]
pub async fn list_participated(
    State(service): State<Arc<BookingService>>,
    Path(email): Path<String>,
) -> Result<Json<ApiResponse<Vec<BookingResponseDto>>>> {
    let bookings = service.list_by_register_email(&email).await?;
    Ok(Json(ApiResponse::success(Some(bookings), None, None)))
}

/// Submit a contest entry
#[utoipa::path(
    post,
    path = "/booking",
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Insert acknowledgement", body = ApiResponse<InsertSummary>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid session cookie")
    ),
    security(("session_cookie" = [])),
    tag = "bookings"
)]
pub async fn create_booking(
    State(service): State<Arc<BookingService>>,
    AppJson(dto): AppJson<CreateBookingDto>,
) -> Result<Json<ApiResponse<InsertSummary>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let summary = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Mark a booking as the winner
#[utoipa::path(
    patch,
    path = "/update/result/{id}",
    params(
        ("id" = String, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Update acknowledgement", body = ApiResponse<UpdateSummary>),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid session cookie")
    ),
    security(("session_cookie" = [])),
    tag = "bookings"
)]
pub async fn mark_winner(
    State(service): State<Arc<BookingService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UpdateSummary>>> {
    let summary = service.mark_winner(&id).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}
