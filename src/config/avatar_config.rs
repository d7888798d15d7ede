//! 아바타 업로드 설정

use std::env;

/// 아바타 관련 설정
///
/// ## 환경 변수
/// - `AVATAR_MAX_UPLOAD_BYTES`: 업로드 허용 최대 크기 (기본값: 5MB)
/// - `RANDOM_AVATAR_BASE_URL`: 랜덤 아바타 생성 서비스 주소
///   (기본값: "https://api.dicebear.com/9.x")
/// - `RANDOM_AVATAR_STYLE`: 랜덤 아바타 스타일 (기본값: "identicon")
#[derive(Debug, Clone)]
pub struct AvatarConfig {
    pub max_upload_bytes: usize,
    pub random_avatar_base_url: String,
    pub random_avatar_style: String,
}

impl AvatarConfig {
    pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

    pub fn from_env() -> Self {
        Self {
            max_upload_bytes: env::var("AVATAR_MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(Self::DEFAULT_MAX_UPLOAD_BYTES),
            random_avatar_base_url: env::var("RANDOM_AVATAR_BASE_URL")
                .unwrap_or_else(|_| "https://api.dicebear.com/9.x".to_string()),
            random_avatar_style: env::var("RANDOM_AVATAR_STYLE")
                .unwrap_or_else(|_| "identicon".to_string()),
        }
    }
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: Self::DEFAULT_MAX_UPLOAD_BYTES,
            random_avatar_base_url: "https://api.dicebear.com/9.x".to_string(),
            random_avatar_style: "identicon".to_string(),
        }
    }
}
