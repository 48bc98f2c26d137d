use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum_extra::extract::CookieJar;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::IssueTokenDto;
use crate::features::auth::services::TokenService;
use crate::shared::types::ApiResponse;

/// Issue a session token and set it as an HTTP-only cookie
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = IssueTokenDto,
    responses(
        (status = 200, description = "Session cookie set"),
        (status = 400, description = "Validation error")
    ),
    tag = "auth"
)]
pub async fn issue_token(
    State(tokens): State<Arc<TokenService>>,
    jar: CookieJar,
    AppJson(dto): AppJson<IssueTokenDto>,
) -> Result<(CookieJar, Json<ApiResponse<()>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let token = tokens.issue(&dto.email, dto.role.as_deref())?;
    let jar = jar.add(tokens.session_cookie(token));

    Ok((jar, Json(ApiResponse::success(None, None, None))))
}

/// Clear the session cookie
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Session cookie cleared")
    ),
    tag = "auth"
)]
pub async fn logout(
    State(tokens): State<Arc<TokenService>>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<()>>)> {
    // The clearing Set-Cookie goes out even when the request carried no cookie
    let jar = jar.add(tokens.clear_cookie());

    Ok((jar, Json(ApiResponse::success(None, None, None))))
}

#[cfg(test)]
mod tests {
    use crate::core::config::SessionConfig;
    use crate::features::auth::routes;
    use crate::features::auth::services::TokenService;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn server() -> (TestServer, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new(SessionConfig {
            jwt_secret: "handler-test-secret".to_string(),
            production: false,
        }));
        let server = TestServer::new(routes::routes(Arc::clone(&tokens))).unwrap();
        (server, tokens)
    }

    #[tokio::test]
    async fn jwt_sets_a_verifiable_http_only_cookie() {
        let (server, tokens) = server();

        let response = server
            .post("/jwt")
            .json(&json!({ "email": "alice@example.com", "role": "user" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);

        let cookie = response.cookie("token");
        assert_eq!(cookie.http_only(), Some(true));
        let user = tokens.verify(cookie.value()).unwrap();
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role.as_deref(), Some("user"));
    }

    #[tokio::test]
    async fn jwt_rejects_a_malformed_email() {
        let (server, _) = server();

        let response = server
            .post("/jwt")
            .json(&json!({ "email": "not-an-email" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn logout_clears_the_cookie_with_no_residual_session() {
        let (server, tokens) = server();

        let issued = server
            .post("/jwt")
            .json(&json!({ "email": "alice@example.com" }))
            .await;
        assert!(tokens.verify(issued.cookie("token").value()).is_ok());

        // The logout request itself carries no cookie; the clearing
        // Set-Cookie must come back regardless
        let response = server.post("/logout").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let cleared = response.cookie("token");
        assert_eq!(cleared.value(), "");
        assert_eq!(cleared.max_age().map(|d| d.whole_seconds()), Some(0));
        assert!(tokens.verify(cleared.value()).is_err());
    }
}
