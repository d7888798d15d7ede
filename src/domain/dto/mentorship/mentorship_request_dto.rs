//! 멘토십 요청 생성 및 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::requests::{MentorshipRequest, RequestStatus};
use crate::utils::time::to_chrono;

/// 멘토십 요청 생성 본문
///
/// ```json
/// { "requester_id": "...", "receiver_id": "...", "description": "Rust 코드 리뷰를 부탁드립니다" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMentorshipRequest {
    #[validate(length(min = 1, message = "요청자 ID는 필수입니다"))]
    pub requester_id: String,
    #[validate(length(min = 1, message = "수신자 ID는 필수입니다"))]
    pub receiver_id: String,
    #[validate(length(
        min = 1,
        max = 4096,
        message = "요청 설명은 1-4096자 사이여야 합니다"
    ))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorshipRequestResponse {
    pub id: String,
    pub requester_id: String,
    pub receiver_id: String,
    pub description: String,
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MentorshipRequest> for MentorshipRequestResponse {
    fn from(request: MentorshipRequest) -> Self {
        Self {
            id: request.id,
            requester_id: request.requester_id,
            receiver_id: request.receiver_id,
            description: request.description,
            status: request.status,
            rejection_reason: request.rejection_reason,
            created_at: to_chrono(request.created_at),
            updated_at: to_chrono(request.updated_at),
        }
    }
}
