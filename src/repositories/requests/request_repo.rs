//! # 요청 리포지토리 구현 (MongoDB)
//!
//! 멘토십 요청은 `mentorship_requests`, 추천 요청은 `recommendation_requests`
//! 컬렉션에 저장됩니다. 문서 필드 이름은 [`RequestRecord`]가 요구하는
//! 공통 이름(`_id`, `requester_id`, `receiver_id`, `created_at`, `version`)을 따릅니다.

use std::marker::PhantomData;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use super::{request_not_found, version_conflict, RequestRepository};
use crate::{
    core::errors::AppResult,
    db::Database,
    domain::entities::requests::RequestRecord,
};

pub const MENTORSHIP_REQUESTS_COLLECTION: &str = "mentorship_requests";
pub const RECOMMENDATION_REQUESTS_COLLECTION: &str = "recommendation_requests";

pub struct MongoRequestRepository<R: RequestRecord> {
    collection: Collection<R>,
    _record: PhantomData<fn() -> R>,
}

impl<R: RequestRecord> MongoRequestRepository<R> {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<R>(collection_name),
            _record: PhantomData,
        }
    }

    /// 참여자 쌍 + 생성 시각 복합 인덱스 생성
    ///
    /// 쿨다운 검사(`find_latest_between`)가 이 인덱스를 사용합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let pair_index = IndexModel::builder()
            .keys(doc! { "requester_id": 1, "receiver_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("participants_created_at".to_string())
                .build())
            .build();

        self.collection.create_index(pair_index).await?;

        Ok(())
    }
}

#[async_trait]
impl<R: RequestRecord> RequestRepository<R> for MongoRequestRepository<R> {
    async fn create(&self, request: R) -> AppResult<R> {
        self.collection.insert_one(&request).await?;
        Ok(request)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<R>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_all(&self) -> AppResult<Vec<R>> {
        let requests = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(requests)
    }

    async fn find_latest_between(&self, requester_id: &str, receiver_id: &str) -> AppResult<Option<R>> {
        let latest = self
            .collection
            .find_one(doc! { "requester_id": requester_id, "receiver_id": receiver_id })
            .sort(doc! { "created_at": -1 })
            .await?;

        Ok(latest)
    }

    async fn save(&self, mut request: R) -> AppResult<R> {
        let expected = request.version();
        request.set_version(expected + 1);

        let result = self
            .collection
            .replace_one(doc! { "_id": request.id(), "version": expected }, &request)
            .await?;

        if result.matched_count == 0 {
            let exists = self.collection.count_documents(doc! { "_id": request.id() }).await? > 0;
            return Err(if exists {
                version_conflict(&request)
            } else {
                request_not_found::<R>(request.id())
            });
        }

        Ok(request)
    }
}
