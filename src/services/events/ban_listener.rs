//! `user_ban` 채널 구독자
//!
//! 외부 서비스가 `{"author_id": "..."}` 메시지를 보내면 해당 사용자를 밴 상태로 표시합니다.
//! 잘못된 메시지는 경고 로그만 남기고 다음 메시지를 계속 처리합니다.
//! 연결이 끊기면 백오프 후 다시 구독합니다.

use std::sync::Arc;
use std::time::Duration;
use futures_util::StreamExt;
use crate::caching::redis::RedisClient;
use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::events::{BanEvent, USER_BAN_CHANNEL};
use crate::repositories::UserRepository;

const MAX_RESUBSCRIBE_DELAY_SECS: u64 = 30;

pub struct BanEventListener {
    redis: RedisClient,
    users: Arc<dyn UserRepository>,
}

impl BanEventListener {
    pub fn new(redis: RedisClient, users: Arc<dyn UserRepository>) -> Self {
        Self { redis, users }
    }

    /// 채널을 구독하고 메시지를 처리합니다.
    ///
    /// 구독이 실패하거나 스트림이 끝나면 지수 백오프 후 다시 구독하며, 반환하지 않습니다.
    pub async fn run(self) {
        let mut attempt = 0u32;

        loop {
            match self.consume().await {
                Ok(()) => {
                    log::warn!("밴 이벤트 구독이 끊어졌습니다. 재구독합니다");
                    attempt = 0;
                }
                Err(e) => {
                    let delay = resubscribe_delay(attempt);
                    log::error!("밴 이벤트 구독 실패 ({}초 후 재시도): {}", delay.as_secs(), e);
                    actix_web::rt::time::sleep(delay).await;
                    attempt = attempt.saturating_add(1);
                }
            }
        }
    }

    /// 한 번의 구독 세션. 스트림이 끝나면 `Ok(())`를 반환합니다.
    async fn consume(&self) -> AppResult<()> {
        let pubsub = self.redis.subscribe(USER_BAN_CHANNEL).await?;
        log::info!("📡 밴 이벤트 구독 시작: {}", USER_BAN_CHANNEL);

        let mut messages = pubsub.into_on_message();
        while let Some(message) = messages.next().await {
            let payload: String = match message.get_payload() {
                Ok(payload) => payload,
                Err(e) => {
                    log::warn!("밴 이벤트 페이로드 읽기 실패: {}", e);
                    continue;
                }
            };

            if let Err(e) = handle_ban_message(self.users.as_ref(), &payload).await {
                log::warn!("밴 이벤트 처리 실패: {}", e);
            }
        }

        Ok(())
    }
}

/// 재구독 대기 시간: 1초에서 시작해 두 배씩 늘어나며 30초를 넘지 않습니다.
pub fn resubscribe_delay(attempt: u32) -> Duration {
    let secs = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
    Duration::from_secs(secs.min(MAX_RESUBSCRIBE_DELAY_SECS))
}

/// 밴 메시지 하나를 처리합니다. 사용자가 밴되었으면 `true`를 반환합니다.
pub async fn handle_ban_message(users: &dyn UserRepository, payload: &str) -> AppResult<bool> {
    let event: BanEvent = serde_json::from_str(payload).context("밴 이벤트 역직렬화 실패")?;

    let banned = users.ban_by_id(&event.author_id).await?;
    if banned {
        log::info!("🚫 사용자 밴 처리: {}", event.author_id);
    } else {
        log::warn!("밴 대상 사용자가 없습니다: {}", event.author_id);
    }

    Ok(banned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::{NewUser, User};
    use crate::repositories::InMemoryUserRepository;

    #[actix_web::test]
    async fn test_ban_message_bans_user() {
        let users = InMemoryUserRepository::new();
        let user = users
            .create(User::new(NewUser {
                username: "spammer".to_string(),
                email: "spam@example.com".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap();

        let payload = format!(r#"{{"author_id": "{}"}}"#, user.id);
        assert!(handle_ban_message(&users, &payload).await.unwrap());
        assert!(users.find_by_id(&user.id).await.unwrap().unwrap().is_banned);
    }

    #[actix_web::test]
    async fn test_malformed_ban_message() {
        let users = InMemoryUserRepository::new();
        assert!(handle_ban_message(&users, "not json").await.is_err());
        assert!(!handle_ban_message(&users, r#"{"author_id": "ghost"}"#).await.unwrap());
    }

    #[test]
    fn test_resubscribe_delay_backs_off_and_caps() {
        assert_eq!(resubscribe_delay(0), Duration::from_secs(1));
        assert_eq!(resubscribe_delay(1), Duration::from_secs(2));
        assert_eq!(resubscribe_delay(4), Duration::from_secs(16));
        assert_eq!(resubscribe_delay(5), Duration::from_secs(30));
        assert_eq!(resubscribe_delay(200), Duration::from_secs(30));
    }
}
