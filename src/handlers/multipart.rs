//! 사용자 생성/아바타 변경 multipart 본문 읽기
//!
//! | part | 내용 |
//! |------|------|
//! | `userJson` | 사용자 생성 요청 JSON (생성 시 필수, 최대 64KiB) |
//! | `file` | 아바타 이미지 (선택) |
//!
//! 파일 내용은 외부 파일 저장소 몫이므로 크기만 세고 버립니다.

use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use crate::core::errors::{AppError, AppResult};
use crate::services::users::AvatarUpload;

pub const USER_JSON_PART: &str = "userJson";
pub const FILE_PART: &str = "file";
pub const MAX_USER_JSON_BYTES: usize = 64 * 1024;

#[derive(Debug, Default)]
pub struct UserForm {
    pub user_json: Option<Vec<u8>>,
    pub file: Option<AvatarUpload>,
}

/// multipart 본문을 읽습니다. 파일이 `max_file_bytes`를 넘으면 즉시 `ValidationError`입니다.
pub async fn read_user_form(mut payload: Multipart, max_file_bytes: usize) -> AppResult<UserForm> {
    let mut form = UserForm::default();

    while let Some(mut field) = payload.try_next().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            USER_JSON_PART => {
                let mut body = Vec::new();
                while let Some(chunk) = field.try_next().await? {
                    if body.len() + chunk.len() > MAX_USER_JSON_BYTES {
                        return Err(AppError::ValidationError(format!(
                            "userJson은 {}바이트 이하여야 합니다",
                            MAX_USER_JSON_BYTES
                        )));
                    }
                    body.extend_from_slice(&chunk);
                }
                form.user_json = Some(body);
            }
            FILE_PART => {
                let file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or_default()
                    .to_string();

                let mut size = 0usize;
                while let Some(chunk) = field.try_next().await? {
                    size += chunk.len();
                    if size > max_file_bytes {
                        return Err(AppError::ValidationError(format!(
                            "아바타 파일은 {}바이트 이하여야 합니다",
                            max_file_bytes
                        )));
                    }
                }

                // 빈 file part는 파일 없음으로 취급
                if size > 0 || !file_name.is_empty() {
                    form.file = Some(AvatarUpload { file_name, size });
                }
            }
            other => {
                log::debug!("알 수 없는 multipart 필드 무시: {}", other);
                while field.try_next().await?.is_some() {}
            }
        }
    }

    Ok(form)
}
