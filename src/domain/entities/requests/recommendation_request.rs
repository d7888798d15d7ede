//! 추천 요청 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use super::{RequestRecord, RequestStatus};

/// 추천 요청
///
/// 요청자가 수신자에게 특정 스킬들에 대한 추천(recommendation)을 요청합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub requester_id: String,
    pub receiver_id: String,
    pub message: String,
    /// 추천을 요청한 스킬 ID 목록
    #[serde(default)]
    pub skill_ids: Vec<String>,
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub version: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl RecommendationRequest {
    /// PENDING 상태의 새 추천 요청을 생성합니다.
    pub fn new(
        requester_id: String,
        receiver_id: String,
        message: String,
        skill_ids: Vec<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: ObjectId::new().to_hex(),
            requester_id,
            receiver_id,
            message,
            skill_ids,
            status: RequestStatus::Pending,
            rejection_reason: None,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

impl RequestRecord for RecommendationRequest {
    const KIND: &'static str = "추천 요청";

    fn id(&self) -> &str {
        &self.id
    }

    fn requester_id(&self) -> &str {
        &self.requester_id
    }

    fn receiver_id(&self) -> &str {
        &self.receiver_id
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    fn created_at(&self) -> DateTime {
        self.created_at
    }

    fn updated_at(&self) -> DateTime {
        self.updated_at
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn set_version(&mut self, version: i64) {
        self.version = version;
    }

    fn record_transition(
        &mut self,
        status: RequestStatus,
        rejection_reason: Option<String>,
        updated_at: DateTime,
    ) {
        self.status = status;
        if rejection_reason.is_some() {
            self.rejection_reason = rejection_reason;
        }
        self.updated_at = updated_at;
    }
}
