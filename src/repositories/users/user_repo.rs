//! # 사용자 리포지토리 구현 (MongoDB)
//!
//! 사용자 엔티티를 MongoDB `users` 컬렉션에 저장하고,
//! ID 조회 결과를 Redis에 캐싱합니다.
//!
//! ## 캐싱 전략
//!
//! - **키 패턴**: `user:{user_id}`
//! - **TTL**: `USER_CACHE_TTL_SECONDS` (기본 600초)
//! - **쓰기 후 갱신**: `save` 후 저장한 문서로 키를 덮어씀
//! - **쓰기 후 무효화**: `ban_by_id` 후 해당 키 삭제
//! - **관계 오라클**: `is_mentee_of`는 캐시를 거치지 않고 MongoDB에 직접 묻습니다
//!
//! 캐시 오류는 조회를 실패시키지 않고 MongoDB 조회로 넘어갑니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, DateTime, Document}, options::IndexOptions, Collection, IndexModel};
use super::UserRepository;
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::User,
};

/// MongoDB 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// MongoDB + Redis 사용자 리포지토리
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
    redis: RedisClient,
    cache_ttl_seconds: u64,
}

impl MongoUserRepository {
    pub fn new(db: &Database, redis: RedisClient, cache_ttl_seconds: u64) -> Self {
        Self {
            collection: db.collection::<User>(USERS_COLLECTION),
            redis,
            cache_ttl_seconds,
        }
    }

    fn cache_key(id: &str) -> String {
        format!("user:{}", id)
    }

    async fn invalidate_cache(&self, id: &str) {
        if let Err(e) = self.redis.del(&Self::cache_key(id)).await {
            log::warn!("사용자 캐시 무효화 실패 ({}): {}", id, e);
        }
    }

    async fn cache_user(&self, user: &User) {
        if let Err(e) = self.redis.set_with_expiry(&Self::cache_key(&user.id), user, self.cache_ttl_seconds).await {
            log::warn!("사용자 캐시 저장 실패 ({}): {}", user.id, e);
        }
    }

    async fn find_by_field(&self, field: &str, value: &str) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { field: value }).await?)
    }

    /// 사용자 컬렉션 인덱스 생성
    ///
    /// 1. `email` 유니크 인덱스
    /// 2. `username` 유니크 인덱스
    /// 3. `created_at` 내림차순 인덱스
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, username_index, created_at_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let cache_key = Self::cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.find_by_field("_id", id).await?;

        if let Some(ref user) = user {
            self.cache_user(user).await;
        }

        Ok(user)
    }

    async fn find_all_by_ids(&self, ids: &[String]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = self
            .collection
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(users)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(users)
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let count = self.collection.count_documents(doc! { "_id": id }).await?;
        Ok(count > 0)
    }

    async fn create(&self, user: User) -> AppResult<User> {
        if self.find_by_field("email", &user.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        if self.find_by_field("username", &user.username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        self.collection.insert_one(&user).await?;

        Ok(user)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let result = self
            .collection
            .replace_one(doc! { "_id": &user.id }, &user)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", user.id)));
        }

        self.cache_user(&user).await;

        Ok(user)
    }

    async fn ban_by_id(&self, id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "is_banned": true, "updated_at": DateTime::now() } },
            )
            .await?;

        self.invalidate_cache(id).await;

        Ok(result.matched_count > 0)
    }

    async fn is_mentee_of(&self, mentee_id: &str, mentor_id: &str) -> AppResult<bool> {
        let count = self
            .collection
            .count_documents(mentee_of_filter(mentee_id, mentor_id))
            .await?;
        Ok(count > 0)
    }
}

fn mentee_of_filter(mentee_id: &str, mentor_id: &str) -> Document {
    doc! { "_id": mentee_id, "mentors": mentor_id }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key() {
        assert_eq!(MongoUserRepository::cache_key("abc"), "user:abc");
    }

    #[test]
    fn test_mentee_of_filter_matches_mentor_list_element() {
        let filter = mentee_of_filter("mentee", "mentor");

        assert_eq!(filter.get_str("_id").unwrap(), "mentee");
        assert_eq!(filter.get_str("mentors").unwrap(), "mentor");
        assert_eq!(filter.len(), 2);
    }
}
