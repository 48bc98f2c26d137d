//! Payment intents via Stripe.
//!
//! Converts a client price into integer minor units and asks Stripe for a
//! payment intent in fixed-currency USD with automatic payment methods; the
//! client finishes the charge with the returned secret.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/create-payment-intent` | Session | Create intent, return client secret |

pub mod dtos;
pub mod gateway;
pub mod handlers;
pub mod routes;
pub mod services;

pub use gateway::StripeClient;
pub use services::PaymentService;
