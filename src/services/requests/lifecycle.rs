//! # Request Lifecycle Manager
//!
//! 멘토십 요청과 추천 요청이 공유하는 생성/조회/수락/거절/검색 흐름입니다.
//!
//! ```text
//! create : 참여자 검사 → 빈도 검사 → PENDING 저장
//! accept : 조회 → 상태 검사 → hook.validate → ACCEPTED 저장(version 검사) → hook.apply
//!          (apply 실패 시 PENDING으로 되돌려 저장)
//! reject : 조회 → 상태 검사 → REJECTED + 사유 저장(version 검사)
//! list   : 전체 조회 → 필터 체인
//! ```
//!
//! 모든 검사가 끝난 뒤에만 쓰기가 일어납니다. 수락 시 관계 변경 같은 부수 효과는
//! 요청이 버전 검사를 통과해 저장된 다음에만 적용되므로, 동시에 들어온
//! 두 전이 중 진 쪽은 `ConflictError`로 끝나고 아무것도 쓰지 않습니다.
//! 부수 효과가 실패하면 요청은 다시 PENDING이 되어 재시도할 수 있습니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::DateTime;
use crate::config::RequestPolicy;
use crate::core::errors::AppResult;
use crate::domain::entities::requests::RequestRecord;
use crate::filters::FilterChain;
use crate::repositories::requests::request_not_found;
use crate::repositories::{RequestRepository, UserRepository};
use crate::validators::{validate_participants, validate_pending, validate_request_frequency};

/// 요청 종류별 수락 규칙과 부수 효과
#[async_trait]
pub trait AcceptHook<R: RequestRecord>: Send + Sync {
    /// 수락 전 추가 검사. 실패하면 아무것도 쓰지 않습니다.
    async fn validate(&self, request: &R) -> AppResult<()>;

    /// 요청이 ACCEPTED로 저장된 뒤 적용할 부수 효과
    async fn apply(&self, request: &R) -> AppResult<()>;
}

/// 추가 규칙도 부수 효과도 없는 수락
pub struct NoopAcceptHook;

#[async_trait]
impl<R: RequestRecord> AcceptHook<R> for NoopAcceptHook {
    async fn validate(&self, _request: &R) -> AppResult<()> {
        Ok(())
    }

    async fn apply(&self, _request: &R) -> AppResult<()> {
        Ok(())
    }
}

pub struct RequestLifecycle<R: RequestRecord, C> {
    requests: Arc<dyn RequestRepository<R>>,
    users: Arc<dyn UserRepository>,
    accept_hook: Arc<dyn AcceptHook<R>>,
    filters: FilterChain<R, C>,
    policy: RequestPolicy,
}

impl<R: RequestRecord, C: 'static> RequestLifecycle<R, C> {
    pub fn new(
        requests: Arc<dyn RequestRepository<R>>,
        users: Arc<dyn UserRepository>,
        accept_hook: Arc<dyn AcceptHook<R>>,
        filters: FilterChain<R, C>,
        policy: RequestPolicy,
    ) -> Self {
        Self { requests, users, accept_hook, filters, policy }
    }

    /// 참여자와 빈도를 검사한 뒤 PENDING 요청을 저장합니다.
    pub async fn create(&self, request: R) -> AppResult<R> {
        validate_participants(self.users.as_ref(), request.requester_id(), request.receiver_id()).await?;

        let latest = self
            .requests
            .find_latest_between(request.requester_id(), request.receiver_id())
            .await?;
        validate_request_frequency(latest.as_ref(), &self.policy, Utc::now())?;

        let created = self.requests.create(request).await?;
        log::info!(
            "{} 생성: {} ({} → {})",
            R::KIND,
            created.id(),
            created.requester_id(),
            created.receiver_id()
        );

        Ok(created)
    }

    pub async fn get(&self, id: &str) -> AppResult<R> {
        self.requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| request_not_found::<R>(id))
    }

    pub async fn accept(&self, id: &str) -> AppResult<R> {
        let mut request = self.get(id).await?;
        validate_pending(request.status())?;
        self.accept_hook.validate(&request).await?;

        request.accept(DateTime::now())?;
        let saved = self.requests.save(request).await?;
        if let Err(e) = self.accept_hook.apply(&saved).await {
            self.reopen(saved).await;
            return Err(e);
        }

        log::info!("{} 수락: {}", R::KIND, saved.id());
        Ok(saved)
    }

    /// 수락 부수 효과가 실패했을 때 요청을 PENDING으로 되돌립니다.
    async fn reopen(&self, mut accepted: R) {
        accepted.reopen(DateTime::now());
        match self.requests.save(accepted).await {
            Ok(reopened) => log::warn!("{} 수락 취소, PENDING 복구: {}", R::KIND, reopened.id()),
            Err(e) => log::error!("{} 수락 취소 실패: {}", R::KIND, e),
        }
    }

    pub async fn reject(&self, id: &str, reason: String) -> AppResult<R> {
        let mut request = self.get(id).await?;
        validate_pending(request.status())?;

        request.reject(reason, DateTime::now())?;
        let saved = self.requests.save(request).await?;

        log::info!("{} 거절: {}", R::KIND, saved.id());
        Ok(saved)
    }

    /// 전체 요청에 필터 체인을 적용합니다 (생성 순 유지).
    pub async fn list(&self, criteria: &C) -> AppResult<Vec<R>> {
        let requests = self.requests.find_all().await?;
        self.filters.filter_all(requests, criteria)
    }
}
