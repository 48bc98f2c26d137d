use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::store::InsertSummary;
use crate::features::favorites::dtos::{AddFavoriteDto, FavoriteResponseDto};
use crate::features::favorites::services::FavoriteService;
use crate::shared::types::ApiResponse;

/// List all favorites
#[utoipa::path(
    get,
    path = "/favorite",
    responses(
        (status = 200, description = "List of favorites", body = ApiResponse<Vec<FavoriteResponseDto>>)
    ),
    tag = "favorites"
)]
pub async fn list_favorites(
    State(service): State<Arc<FavoriteService>>,
) -> Result<Json<ApiResponse<Vec<FavoriteResponseDto>>>> {
    let favorites = service.list().await?;
    Ok(Json(ApiResponse::success(Some(favorites), None, None)))
}

/// Favorite a contest
#[utoipa::path(
    put,
    path = "/addFavorite",
    request_body = AddFavoriteDto,
    responses(
        (status = 200, description = "Insert acknowledgement", body = ApiResponse<InsertSummary>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid session cookie")
    ),
    security(("session_cookie" = [])),
    tag = "favorites"
)]
pub async fn add_favorite(
    State(service): State<Arc<FavoriteService>>,
    AppJson(dto): AppJson<AddFavoriteDto>,
) -> Result<Json<ApiResponse<InsertSummary>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let summary = service.add(dto).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::favorites::routes;
    use crate::shared::test_helpers::MemoryStore;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let store = Arc::new(MemoryStore::new());
        let service = Arc::new(FavoriteService::new(store));
        let app = routes::public_routes(Arc::clone(&service))
            .merge(routes::protected_routes(service));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn favorite_then_list_round_trips_the_pairing() {
        let server = server();

        let added = server
            .put("/addFavorite")
            .json(&json!({
                "userEmail": "alice@example.com",
                "contestId": "abc123",
                "ContestName": "Logo sprint"
            }))
            .await;
        assert_eq!(added.status_code(), StatusCode::OK);

        let listed: Value = server.get("/favorite").await.json();
        let favorites = listed["data"].as_array().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0]["userEmail"], "alice@example.com");
        assert_eq!(favorites[0]["contestId"], "abc123");
        assert_eq!(favorites[0]["ContestName"], "Logo sprint");
    }

    #[tokio::test]
    async fn favorite_without_a_contest_id_is_a_400() {
        let server = server();

        let response = server
            .put("/addFavorite")
            .json(&json!({ "userEmail": "alice@example.com", "contestId": "" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}
