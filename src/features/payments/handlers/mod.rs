pub mod payment_handler;

pub use payment_handler::{__path_create_payment_intent, create_payment_intent};
