//! 추천 요청 검색 필터 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::requests::RequestStatus;
use crate::utils::string_utils::deserialize_optional_string;

/// 추천 요청 검색 조건
///
/// `created_after`/`created_before`는 경계를 포함하지 않습니다.
///
/// ```json
/// { "status": "PENDING", "created_after": "2024-01-01T00:00:00Z" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationRequestFilterDto {
    pub status: Option<RequestStatus>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub requester_id: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub receiver_id: Option<String>,
    /// 메시지 전체가 일치해야 하는 정규식
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub message_pattern: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}
