//! # Mentorship DTOs
//!
//! 멘토십 요청 생성/검색/응답 DTO입니다.

pub mod mentorship_request_dto;
pub mod mentorship_request_filter;

pub use mentorship_request_dto::{CreateMentorshipRequest, MentorshipRequestResponse};
pub use mentorship_request_filter::MentorshipRequestFilterDto;
