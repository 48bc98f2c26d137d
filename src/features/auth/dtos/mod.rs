pub mod session_dto;

pub use session_dto::IssueTokenDto;
