use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::store::{DeleteSummary, UpdateSummary};
use crate::features::users::dtos::{
    UpdateRoleDto, UpsertUserDto, UpsertUserResponseDto, UserResponseDto,
};
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<UserResponseDto>>)
    ),
    tag = "users"
)]
pub async fn list_users(
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let users = service.list().await?;
    Ok(Json(ApiResponse::success(Some(users), None, None)))
}

/// Fetch one user by email
///
/// An unknown email responds with `data: null`, not an error.
#[utoipa::path(
    get,
    path = "/user/{email}",
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "User (or null when unknown)", body = ApiResponse<UserResponseDto>)
    ),
    tag = "users"
)]
pub async fn get_user(
    State(service): State<Arc<UserService>>,
    Path(email): Path<String>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let user = service.get_by_email(&email).await?;
    Ok(Json(ApiResponse::success(user, None, None)))
}

/// Upsert a user keyed by email
///
/// Returns the stored document unchanged when the email already exists,
/// otherwise the upsert acknowledgement.
#[utoipa::path(
    put,
    path = "/user",
    request_body = UpsertUserDto,
    responses(
        (status = 200, description = "Stored user or upsert acknowledgement", body = ApiResponse<UpsertUserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid session cookie")
    ),
    security(("session_cookie" = [])),
    tag = "users"
)]
pub async fn upsert_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<UpsertUserDto>,
) -> Result<Json<ApiResponse<UpsertUserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = service.upsert(dto).await?;
    Ok(Json(ApiResponse::success(Some(outcome), None, None)))
}

/// Set a user's role by email
#[utoipa::path(
    patch,
    path = "/users/update",
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Update acknowledgement", body = ApiResponse<UpdateSummary>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid session cookie")
    ),
    security(("session_cookie" = [])),
    tag = "users"
)]
pub async fn update_user_role(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<UpdateRoleDto>,
) -> Result<Json<ApiResponse<UpdateSummary>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let summary = service.update_role(dto).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Delete a user by email
#[utoipa::path(
    delete,
    path = "/delete/user/{email}",
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "Delete acknowledgement", body = ApiResponse<DeleteSummary>),
        (status = 401, description = "Missing or invalid session cookie")
    ),
    security(("session_cookie" = [])),
    tag = "users"
)]
pub async fn delete_user(
    State(service): State<Arc<UserService>>,
    Path(email): Path<String>,
) -> Result<Json<ApiResponse<DeleteSummary>>> {
    let summary = service.delete_by_email(&email).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::routes;
    use crate::shared::test_helpers::MemoryStore;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let store = Arc::new(MemoryStore::new());
        let service = Arc::new(UserService::new(store));
        let app = routes::public_routes(Arc::clone(&service))
            .merge(routes::protected_routes(service));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn upsert_then_fetch_round_trips_through_the_wire_shape() {
        let server = server();

        let created = server
            .put("/user")
            .json(&json!({ "email": "alice@example.com", "name": "Alice", "role": "user" }))
            .await;
        assert_eq!(created.status_code(), StatusCode::OK);
        let body: Value = created.json();
        assert_eq!(body["success"], true);
        assert!(body["data"]["upsertedId"].is_string());

        let fetched = server.get("/user/alice@example.com").await;
        let body: Value = fetched.json();
        assert_eq!(body["data"]["email"], "alice@example.com");
        assert_eq!(body["data"]["name"], "Alice");
        assert!(body["data"]["timestamp"].is_i64() || body["data"]["timestamp"].is_number());
    }

    #[tokio::test]
    async fn unknown_email_fetch_responds_with_null_data() {
        let server = server();

        let response = server.get("/user/ghost@example.com").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn upsert_without_a_valid_email_is_a_400() {
        let server = server();

        let response = server.put("/user").json(&json!({ "email": "nope" })).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn deleting_an_unknown_email_acknowledges_zero_deletes() {
        let server = server();

        let response = server.delete("/delete/user/ghost@example.com").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"]["deletedCount"], 0);
    }
}
