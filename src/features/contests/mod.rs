//! Contest listings and lifecycle.
//!
//! Contests are created pending and approved by an administrator. The
//! participant-count route replaces the stored count outright even though its
//! path reads as "add"; callers depend on the overwrite.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/AllContest` | No | List all contests |
//! | GET | `/AllContest/{search}` | No | List contests in a category |
//! | GET | `/AllContest/id/{id}` | No | List contest(s) matching id |
//! | GET | `/MyCreatedContest/{email}` | No | List contests by creator |
//! | POST | `/AddContest` | Session | Insert contest |
//! | PUT | `/comment` | Session | Append one comment |
//! | PATCH | `/status/update/{id}` | Session | Approve contest |
//! | PATCH | `/count/update/{id}` | Session | Replace participant count |
//! | DELETE | `/delete/{id}` | Session | Delete contest |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ContestService;
