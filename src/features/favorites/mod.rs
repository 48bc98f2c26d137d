//! Favorited contests.
//!
//! Insert-and-list only; favorites are never removed on this surface, and
//! the same pairing can be stored more than once.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/favorite` | No | List all favorites |
//! | PUT | `/addFavorite` | Session | Favorite a contest |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FavoriteService;
