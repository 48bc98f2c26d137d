use crate::core::error::AppError;
use crate::features::auth::services::TokenService;
use crate::shared::constants::{SESSION_COOKIE_NAME, UNAUTHORIZED_MESSAGE};
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// CORS with credentials enabled for the session cookie.
///
/// Credentialed CORS cannot use wildcards, so methods, headers, and origins
/// are all explicit; config rejects `*` origins before this layer is built.
pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .allow_origin(AllowOrigin::list(origins))
}

pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok());

            if let Some(auth_header) = auth_header {
                if let Some(encoded) = auth_header.strip_prefix("Basic ") {
                    if let Ok(decoded) = BASE64_STANDARD.decode(encoded) {
                        if let Ok(creds) = String::from_utf8(decoded) {
                            if creds == *credentials {
                                return Ok(next.run(req).await);
                            }
                        }
                    }
                }
            }

            let response = Response::builder()
                .status(StatusCode::UNAUTHORIZED)
                .header(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")
                .body(Body::from("Unauthorized"))
                .unwrap();

            Err(response)
        })
    }
}

/// Session verification for mutating routes.
///
/// Rejects with the fixed 401 message when the `token` cookie is absent or
/// fails signature/expiry verification; otherwise the decoded session user is
/// stored in request extensions for handlers to extract.
pub async fn session_guard(
    State(tokens): State<Arc<TokenService>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let cookie = jar
        .get(SESSION_COOKIE_NAME)
        .ok_or_else(|| AppError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()))?;

    let user = tokens.verify(cookie.value())?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SessionConfig;
    use crate::features::auth::models::SessionUser;
    use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
    use axum_test::TestServer;
    use serde_json::Value;

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(SessionConfig {
            jwt_secret: "test-secret".to_string(),
            production: false,
        }))
    }

    fn guarded_router(tokens: Arc<TokenService>) -> Router {
        async fn whoami(user: SessionUser) -> Json<SessionUser> {
            Json(user)
        }

        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(from_fn_with_state(tokens, session_guard))
    }

    #[tokio::test]
    async fn missing_cookie_is_rejected_with_fixed_message() {
        let server = TestServer::new(guarded_router(token_service())).unwrap();

        let response = server.get("/whoami").await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["message"], "unauthorized access");
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn tampered_token_is_rejected() {
        let tokens = token_service();
        let server = TestServer::new(guarded_router(Arc::clone(&tokens))).unwrap();

        let token = tokens.issue("mallory@example.com", None).unwrap();
        let mut tampered = token;
        tampered.push('x');

        let response = server
            .get("/whoami")
            .add_cookie(axum_extra::extract::cookie::Cookie::new(
                SESSION_COOKIE_NAME,
                tampered,
            ))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["message"], "unauthorized access");
    }

    #[tokio::test]
    async fn valid_cookie_reaches_handler_with_session_user() {
        let tokens = token_service();
        let server = TestServer::new(guarded_router(Arc::clone(&tokens))).unwrap();

        let token = tokens.issue("judge@example.com", Some("admin")).unwrap();

        let response = server
            .get("/whoami")
            .add_cookie(axum_extra::extract::cookie::Cookie::new(
                SESSION_COOKIE_NAME,
                token,
            ))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let user: SessionUser = response.json();
        assert_eq!(user.email, "judge@example.com");
        assert_eq!(user.role.as_deref(), Some("admin"));
    }
}
