//! 요청(멘토십/추천) 데이터 액세스 계층
//!
//! 두 요청 타입은 [`RequestRecord`]를 구현하므로 하나의 제네릭 포트
//! [`RequestRepository<R>`]와 구현체로 다룹니다.
//!
//! ## 낙관적 잠금
//!
//! `save`는 저장된 문서의 `version`이 넘겨받은 레코드의 `version`과 같을 때만
//! 교체하고 버전을 1 올립니다. 그 사이 다른 요청이 먼저 저장했다면
//! `ConflictError`로 실패하며 아무것도 쓰지 않습니다.

pub mod request_repo;
pub mod in_memory;

pub use request_repo::{MongoRequestRepository, MENTORSHIP_REQUESTS_COLLECTION, RECOMMENDATION_REQUESTS_COLLECTION};
pub use in_memory::InMemoryRequestRepository;

use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::requests::RequestRecord;

#[async_trait]
pub trait RequestRepository<R: RequestRecord>: Send + Sync {
    async fn create(&self, request: R) -> AppResult<R>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<R>>;

    /// 모든 요청 (생성 순)
    async fn find_all(&self) -> AppResult<Vec<R>>;

    /// 같은 (요청자, 수신자) 순서쌍의 가장 최근 요청
    async fn find_latest_between(&self, requester_id: &str, receiver_id: &str) -> AppResult<Option<R>>;

    /// 버전 검사 후 저장하고, 버전이 증가된 레코드를 반환합니다.
    async fn save(&self, request: R) -> AppResult<R>;
}

pub fn version_conflict<R: RequestRecord>(request: &R) -> AppError {
    AppError::ConflictError(format!(
        "{}이(가) 다른 요청에 의해 먼저 변경되었습니다: {}",
        R::KIND,
        request.id()
    ))
}

pub fn request_not_found<R: RequestRecord>(id: &str) -> AppError {
    AppError::NotFound(format!("{}을(를) 찾을 수 없습니다: {}", R::KIND, id))
}
