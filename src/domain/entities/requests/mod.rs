//! # Request Entities
//!
//! 멘토십 요청과 추천 요청이 공유하는 상태 머신을 정의합니다.
//!
//! ```text
//!              accept
//!   PENDING ───────────▶ ACCEPTED (terminal)
//!      │
//!      │ reject(reason)
//!      ▼
//!   REJECTED (terminal)
//! ```
//!
//! 종료 상태에서는 어떤 전이도 허용되지 않습니다.

pub mod mentorship_request;
pub mod recommendation_request;

pub use mentorship_request::MentorshipRequest;
pub use recommendation_request::RecommendationRequest;

use std::fmt;
use mongodb::bson::DateTime;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};

/// 요청 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }

    /// 다음 상태로의 전이를 검증합니다.
    ///
    /// `PENDING → ACCEPTED`, `PENDING → REJECTED`만 허용되며
    /// 그 외에는 [`AppError::InvalidStateTransition`]을 반환합니다.
    pub fn transition_to(self, next: RequestStatus) -> AppResult<RequestStatus> {
        match (self, next) {
            (RequestStatus::Pending, RequestStatus::Accepted)
            | (RequestStatus::Pending, RequestStatus::Rejected) => Ok(next),
            _ => Err(AppError::InvalidStateTransition(format!(
                "요청이 이미 {} 상태입니다 ({} → {} 불가)",
                self, self, next
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Accepted => "ACCEPTED",
            RequestStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 생명주기 관리 대상 요청의 공통 인터페이스
///
/// [`RequestLifecycle`](crate::services::requests::RequestLifecycle)과
/// 제네릭 리포지토리가 이 trait만으로 두 종류의 요청을 다룹니다.
/// 저장소 필드 이름(`_id`, `requester_id`, `receiver_id`, `created_at`, `version`)은
/// 구현체 모두 동일해야 합니다.
pub trait RequestRecord:
    Clone + Send + Sync + Unpin + Serialize + DeserializeOwned + 'static
{
    /// 로그와 에러 메시지에 쓰이는 요청 종류 이름
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn requester_id(&self) -> &str;
    fn receiver_id(&self) -> &str;
    fn status(&self) -> RequestStatus;
    fn rejection_reason(&self) -> Option<&str>;
    fn created_at(&self) -> DateTime;
    fn updated_at(&self) -> DateTime;

    /// 낙관적 잠금에 쓰이는 버전. 저장할 때마다 1씩 증가합니다.
    fn version(&self) -> i64;
    fn set_version(&mut self, version: i64);

    /// 검증이 끝난 상태 전이를 기록합니다.
    fn record_transition(
        &mut self,
        status: RequestStatus,
        rejection_reason: Option<String>,
        updated_at: DateTime,
    );

    /// PENDING 요청을 ACCEPTED로 전이합니다.
    fn accept(&mut self, now: DateTime) -> AppResult<()> {
        let next = self.status().transition_to(RequestStatus::Accepted)?;
        self.record_transition(next, None, now);
        Ok(())
    }

    /// PENDING 요청을 거절 사유와 함께 REJECTED로 전이합니다.
    fn reject(&mut self, reason: String, now: DateTime) -> AppResult<()> {
        let next = self.status().transition_to(RequestStatus::Rejected)?;
        self.record_transition(next, Some(reason), now);
        Ok(())
    }

    /// 부수 효과 적용에 실패한 수락을 되돌려 PENDING으로 복구합니다.
    ///
    /// 상태 머신 밖의 보상 경로이므로 수락 흐름에서만 사용합니다.
    fn reopen(&mut self, now: DateTime) {
        self.record_transition(RequestStatus::Pending, None, now);
    }
}
