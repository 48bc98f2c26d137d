pub mod request_handler;

pub use request_handler::{__path_add_request, add_request};
