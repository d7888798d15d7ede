//! 메모리 사용자 리포지토리

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::DateTime;
use super::UserRepository;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use crate::repositories::poisoned;

/// 삽입 순서를 유지하는 메모리 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all_by_ids(&self, ids: &[String]) -> AppResult<Vec<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().filter(|u| ids.contains(&u.id)).cloned().collect())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().map_err(poisoned)?.clone())
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().any(|u| u.id == id))
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;

        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", user.id)))?;
        *slot = user.clone();

        Ok(user)
    }

    async fn ban_by_id(&self, id: &str) -> AppResult<bool> {
        let mut users = self.users.write().map_err(poisoned)?;

        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.is_banned = true;
                user.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
