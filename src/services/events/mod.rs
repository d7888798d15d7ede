//! # 이벤트 발행 서비스
//!
//! 서비스 계층은 [`EventPublisher`] 포트만 알고, 실제 전송은 구현체가 담당합니다.
//!
//! - [`RedisEventPublisher`] - Redis Pub/Sub 채널로 JSON 발행
//! - [`InMemoryEventPublisher`] - 발행된 이벤트를 메모리에 기록 (메모리 모드, 테스트)
//!
//! 이벤트 발행은 best-effort입니다. [`publish_best_effort`]는 실패를 경고 로그로만
//! 남기며 호출한 작업을 실패시키지 않습니다.

pub mod ban_listener;

pub use ban_listener::BanEventListener;

use std::sync::Mutex;
use async_trait::async_trait;
use crate::caching::redis::RedisClient;
use crate::core::errors::{AppError, AppResult};
use crate::domain::events::DomainEvent;

#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: DomainEvent) -> AppResult<()>;
}

/// 이벤트를 발행하고 실패는 경고로만 남깁니다.
pub async fn publish_best_effort(publisher: &dyn EventPublisher, event: DomainEvent) {
    let channel = event.channel();
    if let Err(e) = publisher.publish(event).await {
        log::warn!("이벤트 발행 실패 ({}): {}", channel, e);
    }
}

/// Redis Pub/Sub 이벤트 발행자
#[derive(Clone)]
pub struct RedisEventPublisher {
    redis: RedisClient,
}

impl RedisEventPublisher {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, event: DomainEvent) -> AppResult<()> {
        let payload = event.to_payload()?;
        let receivers = self.redis.publish(event.channel(), &payload).await?;

        log::debug!("이벤트 발행: {} (구독자 {}명)", event.channel(), receivers);
        Ok(())
    }
}

/// 발행된 이벤트를 순서대로 기록하는 발행자
#[derive(Default)]
pub struct InMemoryEventPublisher {
    events: Mutex<Vec<DomainEvent>>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지금까지 발행된 이벤트
    pub fn published(&self) -> Vec<DomainEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: DomainEvent) -> AppResult<()> {
        log::debug!("이벤트 기록: {}", event.channel());
        self.events
            .lock()
            .map_err(|_| AppError::InternalError("이벤트 기록 잠금이 오염되었습니다".to_string()))?
            .push(event);
        Ok(())
    }
}
