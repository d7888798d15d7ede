//! 멘토십 관련 서비스

pub mod mentorship_request_service;
pub mod mentorship_service;

pub use mentorship_request_service::{MentorshipAcceptHook, MentorshipRequestService};
pub use mentorship_service::MentorshipService;
