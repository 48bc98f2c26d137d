use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::store::{DeleteSummary, InsertSummary, UpdateSummary};
use crate::features::contests::dtos::{
    AppendCommentDto, ContestResponseDto, CreateContestDto, UpdateCountDto,
};
use crate::features::contests::services::ContestService;
use crate::shared::types::ApiResponse;

/// List all contests
#[utoipa::path(
    get,
    path = "/AllContest",
    responses(
        (status = 200, description = "List of contests", body = ApiResponse<Vec<ContestResponseDto>>)
    ),
    tag = "contests"
)]
pub async fn list_contests(
    State(service): State<Arc<ContestService>>,
) -> Result<Json<ApiResponse<Vec<ContestResponseDto>>>> {
    let contests = service.list().await?;
    Ok(Json(ApiResponse::success(Some(contests), None, None)))
}

/// List contests in a category
///
/// Matches `Category` by exact equality; a term nothing matches responds
/// with an empty list.
#[utoipa::path(
    get,
    path = "/AllContest/{search}",
    params(
        ("search" = String, Path, description = "Category to match exactly")
    ),
    responses(
        (status = 200, description = "Contests in the category", body = ApiResponse<Vec<ContestResponseDto>>)
    ),
    tag = "contests"
)]
pub async fn search_contests(
    State(service): State<Arc<ContestService>>,
    Path(search): Path<String>,
) -> Result<Json<ApiResponse<Vec<ContestResponseDto>>>> {
    let contests = service.search_by_category(&search).await?;
    Ok(Json(ApiResponse::success(Some(contests), None, None)))
}

/// List the contest(s) matching an id
#[utoipa::path(
    get,
    path = "/AllContest/id/{id}",
    params(
        ("id" = String, Path, description = "Contest id")
    ),
    responses(
        (status = 200, description = "Matching contest(s)", body = ApiResponse<Vec<ContestResponseDto>>),
        (status = 400, description = "Malformed id")
    ),
    tag = "contests"
)]
pub async fn get_contest_by_id(
    State(service): State<Arc<ContestService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ContestResponseDto>>>> {
    let contests = service.list_by_id(&id).await?;
    Ok(Json(ApiResponse::success(Some(contests), None, None)))
}

/// List contests created by an email
#[utoipa::path(
    get,
    path = "/MyCreatedContest/{email}",
    params(
        ("email" = String, Path, description = "Creator email")
    ),
    responses(
        (status = 200, description = "Contests by the creator", body = ApiResponse<Vec<ContestResponseDto>>)
    ),
    tag = "contests"
)]
pub async fn list_created_contests(
    State(service): State<Arc<ContestService>>,
    Path(email): Path<String>,
) -> Result<Json<ApiResponse<Vec<ContestResponseDto>>>> {
    let contests = service.list_by_creator(&email).await?;
    Ok(Json(ApiResponse::success(Some(contests), None, None)))
}

/// Insert a contest
#[utoipa::path(
    post,
    path = "/AddContest",
    request_body = CreateContestDto,
    responses(
        (status = 200, description = "Insert acknowledgement", body = ApiResponse<InsertSummary>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid session cookie")
    ),
    security(("session_cookie" = [])),
    tag = "contests"
)]
pub async fn add_contest(
    State(service): State<Arc<ContestService>>,
    AppJson(dto): AppJson<CreateContestDto>,
) -> Result<Json<ApiResponse<InsertSummary>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let summary = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Append one comment to a contest
#[utoipa::path(
    put,
    path = "/comment",
    request_body = AppendCommentDto,
    responses(
        (status = 200, description = "Update acknowledgement", body = ApiResponse<UpdateSummary>),
        (status = 400, description = "Validation error or malformed id"),
        (status = 401, description = "Missing or invalid session cookie")
    ),
    security(("session_cookie" = [])),
    tag = "contests"
)]
pub async fn append_comment(
    State(service): State<Arc<ContestService>>,
    AppJson(dto): AppJson<AppendCommentDto>,
) -> Result<Json<ApiResponse<UpdateSummary>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let summary = service.append_comment(dto).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Approve a contest
#[utoipa::path(
    patch,
    path = "/status/update/{id}",
    params(
        ("id" = String, Path, description = "Contest id")
    ),
    responses(
        (status = 200, description = "Update acknowledgement", body = ApiResponse<UpdateSummary>),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid session cookie")
    ),
    security(("session_cookie" = [])),
    tag = "contests"
)]
pub async fn approve_contest(
    State(service): State<Arc<ContestService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UpdateSummary>>> {
    let summary = service.approve(&id).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Replace a contest's participant count
///
/// The `addCount` value overwrites the stored count wholesale.
#[utoipa::path(
    patch,
    path = "/count/update/{id}",
    params(
        ("id" = String, Path, description = "Contest id")
    ),
    request_body = UpdateCountDto,
    responses(
        (status = 200, description = "Update acknowledgement", body = ApiResponse<UpdateSummary>),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid session cookie")
    ),
    security(("session_cookie" = [])),
    tag = "contests"
)]
pub async fn update_participant_count(
    State(service): State<Arc<ContestService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateCountDto>,
) -> Result<Json<ApiResponse<UpdateSummary>>> {
    let summary = service.set_participants_count(&id, dto.add_count).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Delete a contest by id
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    params(
        ("id" = String, Path, description = "Contest id")
    ),
    responses(
        (status = 200, description = "Delete acknowledgement", body = ApiResponse<DeleteSummary>),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid session cookie")
    ),
    security(("session_cookie" = [])),
    tag = "contests"
)]
pub async fn delete_contest(
    State(service): State<Arc<ContestService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeleteSummary>>> {
    let summary = service.delete(&id).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SessionConfig;
    use crate::core::middleware::session_guard;
    use crate::features::auth::services::TokenService;
    use crate::features::contests::routes;
    use crate::shared::constants::SESSION_COOKIE_NAME;
    use crate::shared::test_helpers::MemoryStore;
    use axum::http::StatusCode;
    use axum::middleware::from_fn_with_state;
    use axum::Router;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let store = Arc::new(MemoryStore::new());
        let service = Arc::new(ContestService::new(store));
        let app = routes::public_routes(Arc::clone(&service))
            .merge(routes::protected_routes(service));
        TestServer::new(app).unwrap()
    }

    async fn create_contest(server: &TestServer, category: &str) -> String {
        let response = server
            .post("/AddContest")
            .json(&json!({
                "ContestName": "Logo sprint",
                "CreatorEmail": "creator@example.com",
                "Category": category,
                "prizeMoney": 100.0
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        body["data"]["insertedId"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn add_then_list_keeps_the_wire_field_names() {
        let server = server();
        create_contest(&server, "design").await;

        let response = server.get("/AllContest").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        let contests = body["data"].as_array().unwrap();
        assert_eq!(contests.len(), 1);
        assert_eq!(contests[0]["ContestName"], "Logo sprint");
        assert_eq!(contests[0]["CreatorEmail"], "creator@example.com");
        assert_eq!(contests[0]["Category"], "design");
        assert_eq!(contests[0]["status"], "pending");
        assert_eq!(contests[0]["participantsCount"], 0);
    }

    #[tokio::test]
    async fn category_search_and_id_lookup_stay_list_shaped() {
        let server = server();
        let id = create_contest(&server, "design").await;
        create_contest(&server, "writing").await;

        let by_category: Value = server.get("/AllContest/design").await.json();
        assert_eq!(by_category["data"].as_array().unwrap().len(), 1);

        let by_id: Value = server.get(&format!("/AllContest/id/{}", id)).await.json();
        let matches = by_id["data"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["id"], id.as_str());
    }

    #[tokio::test]
    async fn malformed_id_lookup_is_a_400() {
        let server = server();

        let response = server.get("/AllContest/id/not-an-id").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn count_update_overwrites_across_two_calls() {
        let server = server();
        let id = create_contest(&server, "design").await;

        server
            .patch(&format!("/count/update/{}", id))
            .json(&json!({ "addCount": 12 }))
            .await;
        let second = server
            .patch(&format!("/count/update/{}", id))
            .json(&json!({ "addCount": 5 }))
            .await;
        assert_eq!(second.status_code(), StatusCode::OK);

        let body: Value = server.get(&format!("/AllContest/id/{}", id)).await.json();
        assert_eq!(body["data"][0]["participantsCount"], 5);
    }

    #[tokio::test]
    async fn status_update_sets_the_approved_literal() {
        let server = server();
        let id = create_contest(&server, "design").await;

        let response = server.patch(&format!("/status/update/{}", id)).await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = server.get(&format!("/AllContest/id/{}", id)).await.json();
        assert_eq!(body["data"][0]["status"], "Approved");
    }

    #[tokio::test]
    async fn comment_appends_preserve_order_over_the_wire() {
        let server = server();
        let id = create_contest(&server, "design").await;

        for text in ["nice brief", "deadline?"] {
            let response = server
                .put("/comment")
                .json(&json!({ "id": id, "comment": text }))
                .await;
            assert_eq!(response.status_code(), StatusCode::OK);
        }

        let body: Value = server.get(&format!("/AllContest/id/{}", id)).await.json();
        assert_eq!(body["data"][0]["comment"], json!(["nice brief", "deadline?"]));
    }

    #[tokio::test]
    async fn delete_of_missing_contest_acknowledges_zero() {
        let server = server();

        let response = server.delete("/delete/badcafebadcafebadcafe123").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"]["deletedCount"], 0);
    }

    #[tokio::test]
    async fn mutating_routes_reject_requests_without_a_session_cookie() {
        let store = Arc::new(MemoryStore::new());
        let service = Arc::new(ContestService::new(store));
        let tokens = Arc::new(TokenService::new(SessionConfig {
            jwt_secret: "contest-test-secret".to_string(),
            production: false,
        }));
        let app = Router::new()
            .merge(routes::public_routes(Arc::clone(&service)))
            .merge(
                routes::protected_routes(service)
                    .route_layer(from_fn_with_state(Arc::clone(&tokens), session_guard)),
            );
        let server = TestServer::new(app).unwrap();

        let denied = server
            .post("/AddContest")
            .json(&json!({ "CreatorEmail": "creator@example.com", "Category": "design" }))
            .await;
        assert_eq!(denied.status_code(), StatusCode::UNAUTHORIZED);
        let body: Value = denied.json();
        assert_eq!(body["message"], "unauthorized access");

        // Reads stay public
        let listed = server.get("/AllContest").await;
        assert_eq!(listed.status_code(), StatusCode::OK);

        // With a valid cookie the same mutation goes through
        let token = tokens.issue("creator@example.com", None).unwrap();
        let allowed = server
            .post("/AddContest")
            .add_cookie(axum_extra::extract::cookie::Cookie::new(
                SESSION_COOKIE_NAME,
                token,
            ))
            .json(&json!({ "CreatorEmail": "creator@example.com", "Category": "design" }))
            .await;
        assert_eq!(allowed.status_code(), StatusCode::OK);
    }
}
