//! 캐싱 및 메시지 버스 계층 모듈
//!
//! Redis를 백엔드로 하는 사용자 조회 캐시와 이벤트 Pub/Sub을 제공합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let redis = RedisClient::new(&config.data).await?;
//! redis.set_with_expiry("user:123", &user, 600).await?;
//! let cached: Option<User> = redis.get("user:123").await?;
//! redis.publish("profile_view_channel", &payload).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
