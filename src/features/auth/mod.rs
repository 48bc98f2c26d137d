//! Session issuing and verification.
//!
//! `POST /jwt` signs the caller-supplied user into a two-hour session token
//! and sets it as the HTTP-only `token` cookie; `POST /logout` clears it.
//! The verification half lives in `core::middleware::session_guard`, which
//! every mutating route is layered with.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/jwt` | No | Issue session token as cookie |
//! | POST | `/logout` | No | Clear session cookie |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TokenService;
