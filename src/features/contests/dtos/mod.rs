pub mod contest_dto;

pub use contest_dto::{AppendCommentDto, ContestResponseDto, CreateContestDto, UpdateCountDto};
