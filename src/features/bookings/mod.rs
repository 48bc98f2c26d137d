//! Contest entries (bookings).
//!
//! A booking records one user's paid entry into a contest. Bookings are
//! never deleted; the only mutation sets `result` to the winner literal.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/submittedContest` | No | List all bookings |
//! | GET | `/participatedContest/{email}` | No | List bookings by register email |
//! | POST | `/booking` | Session | Submit entry |
//! | PATCH | `/update/result/{id}` | Session | Mark winner |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::BookingService;
