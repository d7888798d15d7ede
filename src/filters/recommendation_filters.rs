//! 추천 요청 검색 필터 체인

use chrono::{DateTime, Utc};
use super::{Bound, BoundFilter, EqualsFilter, FilterChain, PatternFilter};
use crate::domain::dto::recommendation::RecommendationRequestFilterDto;
use crate::domain::entities::requests::RecommendationRequest;
use crate::utils::time::to_chrono;

fn created_at(request: &RecommendationRequest) -> Option<DateTime<Utc>> {
    Some(to_chrono(request.created_at))
}

/// 등록 순서: status → requester → receiver → message → created after → created before
pub fn recommendation_request_filter_chain(
) -> FilterChain<RecommendationRequest, RecommendationRequestFilterDto> {
    FilterChain::new()
        .register(EqualsFilter::new(
            "status",
            |c: &RecommendationRequestFilterDto| c.status.map(|s| s.as_str()),
            |r: &RecommendationRequest| r.status.as_str(),
        ))
        .register(EqualsFilter::new(
            "requester_id",
            |c: &RecommendationRequestFilterDto| c.requester_id.as_deref(),
            |r: &RecommendationRequest| r.requester_id.as_str(),
        ))
        .register(EqualsFilter::new(
            "receiver_id",
            |c: &RecommendationRequestFilterDto| c.receiver_id.as_deref(),
            |r: &RecommendationRequest| r.receiver_id.as_str(),
        ))
        .register(PatternFilter::new(
            "message",
            |c: &RecommendationRequestFilterDto| c.message_pattern.as_deref(),
            |r: &RecommendationRequest| Some(r.message.as_str()),
        ))
        .register(BoundFilter::new(
            "created_after",
            Bound::After,
            |c: &RecommendationRequestFilterDto| c.created_after,
            created_at,
        ))
        .register(BoundFilter::new(
            "created_before",
            Bound::Before,
            |c: &RecommendationRequestFilterDto| c.created_before,
            created_at,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::domain::entities::requests::{RequestRecord, RequestStatus};
    use crate::utils::time::to_bson;

    fn request(requester: &str, message: &str, days_ago: i64) -> RecommendationRequest {
        let mut request = RecommendationRequest::new(
            requester.to_string(),
            "receiver".to_string(),
            message.to_string(),
            vec!["rust".to_string()],
        );
        request.created_at = to_bson(Utc::now() - Duration::days(days_ago));
        request
    }

    fn requests() -> Vec<RecommendationRequest> {
        let mut rejected = request("a", "old one", 30);
        rejected.reject("no".to_string(), mongodb::bson::DateTime::now()).unwrap();

        vec![rejected, request("a", "recent", 2), request("b", "recent too", 1)]
    }

    #[test]
    fn test_status_and_requester() {
        let filter = RecommendationRequestFilterDto {
            status: Some(RequestStatus::Pending),
            requester_id: Some("a".to_string()),
            ..Default::default()
        };

        let result = recommendation_request_filter_chain().filter_all(requests(), &filter).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].message, "recent");
    }

    #[test]
    fn test_created_window() {
        let filter = RecommendationRequestFilterDto {
            created_after: Some(Utc::now() - Duration::days(10)),
            created_before: Some(Utc::now() - Duration::hours(36)),
            ..Default::default()
        };

        let result = recommendation_request_filter_chain().filter_all(requests(), &filter).unwrap();

        let messages: Vec<&str> = result.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["recent"]);
    }

    #[test]
    fn test_message_pattern_is_full_match() {
        let filter = RecommendationRequestFilterDto {
            message_pattern: Some("recent".to_string()),
            ..Default::default()
        };

        let result = recommendation_request_filter_chain().filter_all(requests(), &filter).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].requester_id, "a");
    }
}
