use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::core::config::SessionConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::models::{SessionClaims, SessionUser};
use crate::shared::constants::{SESSION_COOKIE_NAME, UNAUTHORIZED_MESSAGE};

/// How long an issued session token stays valid
const SESSION_TTL_HOURS: i64 = 2;

/// Service for signing and verifying session tokens and building the cookie
/// that carries them
pub struct TokenService {
    config: SessionConfig,
}

impl TokenService {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Sign a session token for the given user, valid for two hours
    pub fn issue(&self, email: &str, role: Option<&str>) -> Result<String> {
        let now = Utc::now();
        let claims = SessionClaims {
            email: email.to_string(),
            role: role.map(|r| r.to_string()),
            iat: now.timestamp(),
            exp: (now + Duration::hours(SESSION_TTL_HOURS)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Failed to sign session token: {}", e);
            AppError::Internal(format!("Failed to sign session token: {}", e))
        })
    }

    /// Verify signature and expiry of a session token and return the user it
    /// was issued for
    pub fn verify(&self, token: &str) -> Result<SessionUser> {
        let data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| AppError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()))?;

        Ok(SessionUser {
            email: data.claims.email,
            role: data.claims.role,
        })
    }

    /// HTTP-only session cookie carrying the signed token.
    ///
    /// Production deployments serve the frontend from a different origin, so
    /// the cookie switches to Secure + SameSite=None there; everywhere else
    /// it stays SameSite=Strict without the Secure flag.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        self.cookie_with_value(token)
    }

    /// Removal variant of the session cookie: empty value with an immediate
    /// expiry, same flags, so the client drops any stored session
    pub fn clear_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.cookie_with_value(String::new());
        cookie.make_removal();
        cookie
    }

    fn cookie_with_value(&self, value: String) -> Cookie<'static> {
        let builder = Cookie::build((SESSION_COOKIE_NAME, value))
            .http_only(true)
            .path("/");

        let builder = if self.config.production {
            builder.secure(true).same_site(SameSite::None)
        } else {
            builder.secure(false).same_site(SameSite::Strict)
        };

        builder.build()
    }
}
