//! 멘토십 요청 검색 필터 체인

use super::{EqualsFilter, FilterChain, OneOfFilter, PatternFilter};
use crate::domain::dto::mentorship::MentorshipRequestFilterDto;
use crate::domain::entities::requests::MentorshipRequest;

/// 등록 순서: description → requester ids → receiver ids → status
pub fn mentorship_request_filter_chain() -> FilterChain<MentorshipRequest, MentorshipRequestFilterDto> {
    FilterChain::new()
        .register(PatternFilter::new(
            "description",
            |c: &MentorshipRequestFilterDto| c.description_pattern.as_deref(),
            |r: &MentorshipRequest| Some(r.description.as_str()),
        ))
        .register(OneOfFilter::new(
            "requester_ids",
            |c: &MentorshipRequestFilterDto| c.requester_ids.as_slice(),
            |r: &MentorshipRequest| r.requester_id.as_str(),
        ))
        .register(OneOfFilter::new(
            "receiver_ids",
            |c: &MentorshipRequestFilterDto| c.receiver_ids.as_slice(),
            |r: &MentorshipRequest| r.receiver_id.as_str(),
        ))
        .register(EqualsFilter::new(
            "status",
            |c: &MentorshipRequestFilterDto| c.status.map(|s| s.as_str()),
            |r: &MentorshipRequest| r.status.as_str(),
        ))
}
