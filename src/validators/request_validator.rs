//! 요청 공통 검사 (참여자, 빈도, 상태)

use chrono::{DateTime, Utc};
use crate::config::RequestPolicy;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::requests::{RequestRecord, RequestStatus};
use crate::repositories::UserRepository;
use crate::utils::time::to_chrono;

/// 요청자와 수신자가 서로 다른 기존 사용자인지 검사합니다.
pub async fn validate_participants(
    users: &dyn UserRepository,
    requester_id: &str,
    receiver_id: &str,
) -> AppResult<()> {
    if requester_id == receiver_id {
        return Err(AppError::InvalidParticipants(
            "요청자와 수신자가 같을 수 없습니다".to_string(),
        ));
    }

    for (role, id) in [("요청자", requester_id), ("수신자", receiver_id)] {
        if !users.exists_by_id(id).await? {
            return Err(AppError::InvalidParticipants(format!(
                "{}가 존재하지 않습니다: {}",
                role, id
            )));
        }
    }

    Ok(())
}

/// 같은 순서쌍의 최근 요청이 쿨다운 기간 안에 있으면 실패합니다.
///
/// 이전 요청의 상태는 보지 않습니다. 거절된 요청도 쿨다운을 시작합니다.
pub fn validate_request_frequency<R: RequestRecord>(
    latest: Option<&R>,
    policy: &RequestPolicy,
    now: DateTime<Utc>,
) -> AppResult<()> {
    let Some(latest) = latest else {
        return Ok(());
    };

    let last_requested_at = to_chrono(latest.created_at());
    if now - last_requested_at < policy.cooldown {
        return Err(AppError::DuplicateRequestWindow(format!(
            "{}은(는) {}일에 한 번만 보낼 수 있습니다 (마지막 요청: {})",
            R::KIND,
            policy.cooldown.num_days(),
            last_requested_at.to_rfc3339()
        )));
    }

    Ok(())
}

/// PENDING 상태인지 검사합니다.
pub fn validate_pending(status: RequestStatus) -> AppResult<()> {
    if status.is_terminal() {
        return Err(AppError::InvalidStateTransition(format!(
            "요청이 이미 {} 상태입니다",
            status
        )));
    }
    Ok(())
}
