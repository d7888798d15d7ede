//! 요청 생명주기 정책 설정
//!
//! 멘토십/추천 요청의 쿨다운 기간 등 요청 검증에 사용되는 값들을 관리합니다.

use std::env;
use chrono::Duration;

/// 요청 종류별 검증 정책
///
/// 생성자 주입으로 [`RequestLifecycle`](crate::services::requests::RequestLifecycle)에 전달됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestPolicy {
    /// 같은 (요청자, 수신자) 쌍에 대해 새 요청을 보낼 수 없는 기간
    pub cooldown: Duration,
}

impl RequestPolicy {
    pub fn with_cooldown_days(days: i64) -> Self {
        Self {
            cooldown: Duration::days(days),
        }
    }
}

/// 요청 정책 환경 변수 리더
///
/// ## 환경 변수
/// - `MENTORSHIP_REQUEST_COOLDOWN_DAYS` (기본값: 90)
/// - `RECOMMENDATION_REQUEST_COOLDOWN_DAYS` (기본값: 180)
pub struct RequestPolicyConfig;

impl RequestPolicyConfig {
    pub const DEFAULT_MENTORSHIP_COOLDOWN_DAYS: i64 = 90;
    pub const DEFAULT_RECOMMENDATION_COOLDOWN_DAYS: i64 = 180;

    pub fn mentorship_cooldown_days() -> i64 {
        Self::read_days(
            "MENTORSHIP_REQUEST_COOLDOWN_DAYS",
            Self::DEFAULT_MENTORSHIP_COOLDOWN_DAYS,
        )
    }

    pub fn recommendation_cooldown_days() -> i64 {
        Self::read_days(
            "RECOMMENDATION_REQUEST_COOLDOWN_DAYS",
            Self::DEFAULT_RECOMMENDATION_COOLDOWN_DAYS,
        )
    }

    pub fn mentorship() -> RequestPolicy {
        RequestPolicy::with_cooldown_days(Self::mentorship_cooldown_days())
    }

    pub fn recommendation() -> RequestPolicy {
        RequestPolicy::with_cooldown_days(Self::recommendation_cooldown_days())
    }

    // 음수 값은 무시하고 기본값 사용
    fn read_days(key: &str, default: i64) -> i64 {
        match env::var(key).ok().map(|v| v.parse::<i64>()) {
            Some(Ok(days)) if days >= 0 => days,
            Some(_) => {
                log::warn!("{} 파싱 실패. 기본값 {}일 사용", key, default);
                default
            }
            None => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_with_cooldown_days() {
        let policy = RequestPolicy::with_cooldown_days(90);
        assert_eq!(policy.cooldown, Duration::days(90));
    }

    #[test]
    fn test_default_cooldowns() {
        if env::var("MENTORSHIP_REQUEST_COOLDOWN_DAYS").is_err() {
            assert_eq!(RequestPolicyConfig::mentorship_cooldown_days(), 90);
        }
        if env::var("RECOMMENDATION_REQUEST_COOLDOWN_DAYS").is_err() {
            assert_eq!(RequestPolicyConfig::recommendation_cooldown_days(), 180);
        }
    }
}
