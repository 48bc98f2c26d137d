use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::core::store::{DeleteSummary, InsertSummary, UpdateSummary};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::bookings::{dtos as bookings_dtos, handlers as bookings_handlers};
use crate::features::contests::{dtos as contests_dtos, handlers as contests_handlers};
use crate::features::favorites::{dtos as favorites_dtos, handlers as favorites_handlers};
use crate::features::payments::{dtos as payments_dtos, handlers as payments_handlers};
use crate::features::promotions::{dtos as promotions_dtos, handlers as promotions_handlers};
use crate::features::requests::{dtos as requests_dtos, handlers as requests_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::constants::SESSION_COOKIE_NAME;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::issue_token,
        auth_handlers::logout,
        // Users
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::upsert_user,
        users_handlers::update_user_role,
        users_handlers::delete_user,
        // Contests
        contests_handlers::list_contests,
        contests_handlers::search_contests,
        contests_handlers::get_contest_by_id,
        contests_handlers::list_created_contests,
        contests_handlers::add_contest,
        contests_handlers::append_comment,
        contests_handlers::approve_contest,
        contests_handlers::update_participant_count,
        contests_handlers::delete_contest,
        // Bookings
        bookings_handlers::list_bookings,
        bookings_handlers::list_participated,
        bookings_handlers::create_booking,
        bookings_handlers::mark_winner,
        // Favorites
        favorites_handlers::list_favorites,
        favorites_handlers::add_favorite,
        // Promotions (public)
        promotions_handlers::list_promotions,
        // Requests
        requests_handlers::add_request,
        // Payments
        payments_handlers::create_payment_intent,
    ),
    components(
        schemas(
            // Shared
            Meta,
            InsertSummary,
            UpdateSummary,
            DeleteSummary,
            ApiResponse<InsertSummary>,
            ApiResponse<UpdateSummary>,
            ApiResponse<DeleteSummary>,
            // Auth
            auth_dtos::IssueTokenDto,
            // Users
            users_dtos::UpsertUserDto,
            users_dtos::UpdateRoleDto,
            users_dtos::UserResponseDto,
            users_dtos::UpsertUserResponseDto,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<users_dtos::UpsertUserResponseDto>,
            // Contests
            contests_dtos::CreateContestDto,
            contests_dtos::AppendCommentDto,
            contests_dtos::UpdateCountDto,
            contests_dtos::ContestResponseDto,
            ApiResponse<Vec<contests_dtos::ContestResponseDto>>,
            // Bookings
            bookings_dtos::CreateBookingDto,
            bookings_dtos::BookingResponseDto,
            ApiResponse<Vec<bookings_dtos::BookingResponseDto>>,
            // Favorites
            favorites_dtos::AddFavoriteDto,
            favorites_dtos::FavoriteResponseDto,
            ApiResponse<Vec<favorites_dtos::FavoriteResponseDto>>,
            // Promotions
            promotions_dtos::PromotionResponseDto,
            ApiResponse<Vec<promotions_dtos::PromotionResponseDto>>,
            // Requests
            requests_dtos::CreateRequestDto,
            // Payments
            payments_dtos::PriceInput,
            payments_dtos::CreatePaymentIntentDto,
            payments_dtos::PaymentIntentResponseDto,
            ApiResponse<payments_dtos::PaymentIntentResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Session token issuing and clearing"),
        (name = "users", description = "User accounts keyed by email"),
        (name = "contests", description = "Contest listings and lifecycle"),
        (name = "bookings", description = "Contest entries"),
        (name = "favorites", description = "Favorited contests"),
        (name = "promotions", description = "Promotion banners (public)"),
        (name = "requests", description = "Contests submitted for review"),
        (name = "payments", description = "Stripe payment intents"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Contestify API",
        version = "0.1.0",
        description = "API documentation for Contestify",
    )
)]
pub struct ApiDoc;

/// Adds the session-cookie security scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE_NAME))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_doc_registers_the_session_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/jwt"));
        assert!(doc.paths.paths.contains_key("/logout"));
    }
}
