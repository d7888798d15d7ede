//! 저장 실패를 흉내 내는 테스트용 사용자 리포지토리

use std::sync::atomic::{AtomicI64, Ordering};
use async_trait::async_trait;
use super::{InMemoryUserRepository, UserRepository};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;

/// `fail_on_save(n)` 이후 n번째 `save` 호출 하나만 `DatabaseError`를 반환합니다.
pub struct FailingSaveUserRepository {
    inner: InMemoryUserRepository,
    saves: AtomicI64,
    fail_at: AtomicI64,
}

impl FailingSaveUserRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemoryUserRepository::new(),
            saves: AtomicI64::new(0),
            fail_at: AtomicI64::new(-1),
        }
    }

    pub fn fail_on_save(&self, nth: i64) {
        self.saves.store(0, Ordering::SeqCst);
        self.fail_at.store(nth, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for FailingSaveUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all_by_ids(&self, ids: &[String]) -> AppResult<Vec<User>> {
        self.inner.find_all_by_ids(ids).await
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.inner.find_all().await
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        self.inner.exists_by_id(id).await
    }

    async fn create(&self, user: User) -> AppResult<User> {
        self.inner.create(user).await
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let count = self.saves.fetch_add(1, Ordering::SeqCst) + 1;
        if count == self.fail_at.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("down".to_string()));
        }
        self.inner.save(user).await
    }

    async fn ban_by_id(&self, id: &str) -> AppResult<bool> {
        self.inner.ban_by_id(id).await
    }
}
