//! 메모리 요청 리포지토리

use std::sync::RwLock;
use async_trait::async_trait;
use super::{request_not_found, version_conflict, RequestRepository};
use crate::core::errors::AppResult;
use crate::domain::entities::requests::RequestRecord;
use crate::repositories::poisoned;

pub struct InMemoryRequestRepository<R> {
    requests: RwLock<Vec<R>>,
}

impl<R> InMemoryRequestRepository<R> {
    pub fn new() -> Self {
        Self { requests: RwLock::new(Vec::new()) }
    }
}

impl<R> Default for InMemoryRequestRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: RequestRecord> RequestRepository<R> for InMemoryRequestRepository<R> {
    async fn create(&self, request: R) -> AppResult<R> {
        self.requests.write().map_err(poisoned)?.push(request.clone());
        Ok(request)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<R>> {
        let requests = self.requests.read().map_err(poisoned)?;
        Ok(requests.iter().find(|r| r.id() == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<R>> {
        Ok(self.requests.read().map_err(poisoned)?.clone())
    }

    async fn find_latest_between(&self, requester_id: &str, receiver_id: &str) -> AppResult<Option<R>> {
        let requests = self.requests.read().map_err(poisoned)?;
        Ok(requests
            .iter()
            .filter(|r| r.requester_id() == requester_id && r.receiver_id() == receiver_id)
            .max_by_key(|r| r.created_at())
            .cloned())
    }

    async fn save(&self, mut request: R) -> AppResult<R> {
        let mut requests = self.requests.write().map_err(poisoned)?;

        let slot = requests
            .iter_mut()
            .find(|r| r.id() == request.id())
            .ok_or_else(|| request_not_found::<R>(request.id()))?;

        if slot.version() != request.version() {
            return Err(version_conflict(&request));
        }

        request.set_version(request.version() + 1);
        *slot = request.clone();

        Ok(request)
    }
}
