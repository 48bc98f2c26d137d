//! Promotion banners.
//!
//! Read-only reference data. The backing collection is literally named
//! `promotion` (singular); see `shared::constants`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/promotion` | No | List all promotions |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::PromotionService;
