//! # Configuration Module
//!
//! 사용자 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 읽어 하나의 [`AppConfig`]로 모으고,
//! 이 구조체를 각 서비스 생성자에 명시적으로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, MongoDB/Redis 설정
//! - [`request_config`] - 멘토십/추천 요청 쿨다운 정책
//! - [`avatar_config`] - 아바타 업로드 및 랜덤 아바타 설정
//!
//! ## 환경 파일
//!
//! `PROFILE` 환경 변수에 따라 `.env.dev` 또는 `.env.prod` 파일을 로드합니다 (`main.rs`).

pub mod data_config;
pub mod request_config;
pub mod avatar_config;

pub use data_config::*;
pub use request_config::*;
pub use avatar_config::*;

use std::env;

/// Rate Limiting 설정
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self { per_second, burst_size }
    }
}

/// 애플리케이션 전체 설정
///
/// 프로세스 시작 시 한 번 만들어져 `AppState` 구성에 사용됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub storage: StorageBackend,
    pub data: DataConfig,
    pub rate_limit: RateLimitConfig,
    pub mentorship_policy: RequestPolicy,
    pub recommendation_policy: RequestPolicy,
    pub avatar: AvatarConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            environment: Environment::current(),
            storage: StorageBackend::current(),
            data: DataConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
            mentorship_policy: RequestPolicyConfig::mentorship(),
            recommendation_policy: RequestPolicyConfig::recommendation(),
            avatar: AvatarConfig::from_env(),
        }
    }

    /// 외부 의존성 없이 동작하는 테스트용 설정
    pub fn for_tests() -> Self {
        Self {
            environment: Environment::Test,
            storage: StorageBackend::Memory,
            data: DataConfig::from_env(),
            rate_limit: RateLimitConfig { per_second: 100, burst_size: 200 },
            mentorship_policy: RequestPolicy::with_cooldown_days(
                RequestPolicyConfig::DEFAULT_MENTORSHIP_COOLDOWN_DAYS,
            ),
            recommendation_policy: RequestPolicy::with_cooldown_days(
                RequestPolicyConfig::DEFAULT_RECOMMENDATION_COOLDOWN_DAYS,
            ),
            avatar: AvatarConfig::default(),
        }
    }
}
