//! Contest-review requests.
//!
//! Insert-only: a submitted request waits for creator review out of band,
//! and nothing on this surface reads it back.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/AddRequest` | Session | Submit contest for review |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::RequestService;
