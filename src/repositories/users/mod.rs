//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`] 포트와 두 구현체를 제공합니다.
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB `users` 컬렉션 + Redis 캐시
//! - [`InMemoryUserRepository`](in_memory::InMemoryUserRepository) - 프로세스 메모리

pub mod user_repo;
pub mod in_memory;
#[cfg(test)]
pub mod failing;

pub use user_repo::MongoUserRepository;
pub use in_memory::InMemoryUserRepository;

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

/// 사용자 저장소 포트
///
/// 요청 검증기에게는 사용자 존재/관계 오라클 역할도 합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// ID 목록에 해당하는 사용자들. 없는 ID는 건너뜁니다.
    async fn find_all_by_ids(&self, ids: &[String]) -> AppResult<Vec<User>>;

    /// 모든 사용자 (생성 순)
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;

    /// 새 사용자를 저장합니다.
    ///
    /// 이메일이나 사용자명이 이미 사용 중이면 `ConflictError`를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 기존 사용자 문서를 통째로 교체합니다. 없는 사용자면 `NotFound`입니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// 사용자를 밴 상태로 표시합니다. 사용자가 없으면 `false`를 반환합니다.
    async fn ban_by_id(&self, id: &str) -> AppResult<bool>;

    /// `mentee_id` 사용자가 `mentor_id` 사용자의 멘티인지 확인합니다.
    async fn is_mentee_of(&self, mentee_id: &str, mentor_id: &str) -> AppResult<bool> {
        Ok(self
            .find_by_id(mentee_id)
            .await?
            .is_some_and(|mentee| mentee.has_mentor(mentor_id)))
    }
}
