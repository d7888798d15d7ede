//! 멘토십 요청 검색 필터 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::requests::RequestStatus;
use crate::utils::string_utils::deserialize_optional_string;

/// 멘토십 요청 검색 조건
///
/// 빈 ID 목록은 "필터 없음"으로 취급합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MentorshipRequestFilterDto {
    /// 설명 전체가 일치해야 하는 정규식
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub description_pattern: Option<String>,
    pub requester_ids: Vec<String>,
    pub receiver_ids: Vec<String>,
    pub status: Option<RequestStatus>,
}
