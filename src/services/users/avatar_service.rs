//! 아바타 서비스
//!
//! 업로드 파일 자체는 외부 파일 저장소가 보관하고, 이 서비스는 파일 키만 만듭니다.
//! 파일 없이 아바타를 설정하면 랜덤 아바타 생성 서비스의 URL을 키로 사용합니다.

use uuid::Uuid;
use crate::config::AvatarConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::UserProfilePic;

/// 업로드된 아바타 파일 정보
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    pub file_name: String,
    pub size: usize,
}

#[derive(Debug, Clone)]
pub struct AvatarService {
    config: AvatarConfig,
}

impl AvatarService {
    pub const SMALL_AVATAR_SIZE: u32 = 64;

    pub fn new(config: AvatarConfig) -> Self {
        Self { config }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.config.max_upload_bytes
    }

    /// 업로드 파일 이름과 크기를 검사합니다.
    pub fn validate_upload(&self, upload: &AvatarUpload) -> AppResult<()> {
        if upload.file_name.trim().is_empty() {
            return Err(AppError::ValidationError("아바타 파일 이름이 비어 있습니다".to_string()));
        }

        if upload.size == 0 {
            return Err(AppError::ValidationError("빈 아바타 파일입니다".to_string()));
        }

        if upload.size > self.config.max_upload_bytes {
            return Err(AppError::ValidationError(format!(
                "아바타 파일은 {}바이트 이하여야 합니다 (현재 {}바이트)",
                self.config.max_upload_bytes, upload.size
            )));
        }

        Ok(())
    }

    /// 업로드 파일에 새 저장소 키를 할당합니다.
    pub fn upload_keys(&self, user_id: &str) -> UserProfilePic {
        let key = Uuid::new_v4();

        UserProfilePic {
            file_id: Some(format!("avatars/{}/{}", user_id, key)),
            small_file_id: Some(format!("avatars/{}/{}_small", user_id, key)),
        }
    }

    /// 랜덤 시드로 생성한 아바타 URL
    pub fn random_avatar(&self) -> UserProfilePic {
        let url = format!(
            "{}/{}/svg?seed={}",
            self.config.random_avatar_base_url.trim_end_matches('/'),
            self.config.random_avatar_style,
            Uuid::new_v4().simple()
        );

        UserProfilePic {
            small_file_id: Some(format!("{}&size={}", url, Self::SMALL_AVATAR_SIZE)),
            file_id: Some(url),
        }
    }
}
