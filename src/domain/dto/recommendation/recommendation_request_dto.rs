//! 추천 요청 생성 및 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::requests::{RecommendationRequest, RequestStatus};
use crate::utils::time::to_chrono;

/// 추천 요청 생성 본문
///
/// 메시지 공백 여부와 스킬 목록 중복은 서비스 계층의 검증기가 확인합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRecommendationRequest {
    #[validate(length(min = 1, message = "요청자 ID는 필수입니다"))]
    pub requester_id: String,
    #[validate(length(min = 1, message = "수신자 ID는 필수입니다"))]
    pub receiver_id: String,
    #[validate(length(max = 4096, message = "메시지는 4096자 이하여야 합니다"))]
    pub message: String,
    #[serde(default)]
    pub skill_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequestResponse {
    pub id: String,
    pub requester_id: String,
    pub receiver_id: String,
    pub message: String,
    pub skill_ids: Vec<String>,
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RecommendationRequest> for RecommendationRequestResponse {
    fn from(request: RecommendationRequest) -> Self {
        Self {
            id: request.id,
            requester_id: request.requester_id,
            receiver_id: request.receiver_id,
            message: request.message,
            skill_ids: request.skill_ids,
            status: request.status,
            rejection_reason: request.rejection_reason,
            created_at: to_chrono(request.created_at),
            updated_at: to_chrono(request.updated_at),
        }
    }
}
