pub mod session_handler;

pub use session_handler::{__path_issue_token, __path_logout, issue_token, logout};
