//! 아바타 파일 키 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::users::UserProfilePic;

/// 프로필 이미지 파일 키
///
/// 업로드된 아바타 키를 저장할 때의 요청 본문이자 아바타 키 조회 응답입니다.
/// 아바타가 없는 사용자를 조회하면 두 필드 모두 빈 문자열인 값을 반환합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserProfilePicDto {
    #[validate(length(min = 1, message = "파일 키는 필수입니다"))]
    pub file_id: String,
    #[validate(length(min = 1, message = "썸네일 파일 키는 필수입니다"))]
    pub small_file_id: String,
}

impl From<UserProfilePic> for UserProfilePicDto {
    fn from(pic: UserProfilePic) -> Self {
        Self {
            file_id: pic.file_id.unwrap_or_default(),
            small_file_id: pic.small_file_id.unwrap_or_default(),
        }
    }
}

impl From<UserProfilePicDto> for UserProfilePic {
    fn from(dto: UserProfilePicDto) -> Self {
        Self {
            file_id: Some(dto.file_id),
            small_file_id: Some(dto.small_file_id),
        }
    }
}
