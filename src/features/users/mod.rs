//! User accounts keyed by email.
//!
//! The upsert is idempotent: a second `PUT /user` for the same email returns
//! the stored document untouched instead of merging the new payload.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/users` | No | List all users |
//! | GET | `/user/{email}` | No | Fetch one user by email |
//! | PUT | `/user` | Session | Upsert user keyed by email |
//! | PATCH | `/users/update` | Session | Set role + timestamp by email |
//! | DELETE | `/delete/user/{email}` | Session | Delete user by email |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
