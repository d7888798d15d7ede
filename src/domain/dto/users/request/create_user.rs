//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 생성을 위한 요청 데이터 구조입니다.
//! HTTP 계층에서는 multipart 요청의 `userJson` 파트로 전달됩니다.
//!
//! ## 검증 규칙
//!
//! - `username`: 3-64자, 영문/숫자/언더스코어만 허용
//! - `email`: 이메일 형식. 중복 여부는 서비스 계층에서 검증
//! - `phone`: 최대 32자
//! - `about_me`: 최대 4096자
//! - `experience`: 0-100년
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "username": "john_doe",
//!   "email": "user@example.com",
//!   "city": "Seoul",
//!   "country": "Korea",
//!   "experience": 3
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::users::NewUser;
use crate::utils::string_utils::{clean_optional_string, deserialize_optional_string};

/// 새로운 사용자 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자명
    ///
    /// 시스템 내에서 유일해야 합니다 (서비스 계층에서 검증).
    #[validate(length(
        min = 3,
        max = 64,
        message = "사용자명은 3-64자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 32, message = "전화번호는 32자 이하여야 합니다"))]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 4096, message = "자기소개는 4096자 이하여야 합니다"))]
    pub about_me: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub country: Option<String>,

    /// 경력 (년)
    #[serde(default)]
    #[validate(range(min = 0, max = 100, message = "경력은 0-100년 사이여야 합니다"))]
    pub experience: Option<i32>,
}

impl CreateUserRequest {
    /// 검증이 끝난 요청을 엔티티 생성 값으로 변환합니다.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: clean_optional_string(self.phone),
            about_me: clean_optional_string(self.about_me),
            city: clean_optional_string(self.city),
            country: clean_optional_string(self.country),
            experience: self.experience,
        }
    }
}

/// 사용자명 문자 검증
///
/// 알파벳, 숫자, 언더스코어만 허용합니다.
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateUserRequest {
        serde_json::from_str(
            r#"{"username": "john_doe", "email": "John@Example.com", "city": "  ", "experience": 3}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_request() {
        let request = request();
        assert!(request.validate().is_ok());
        assert_eq!(request.city, None);
    }

    #[test]
    fn test_invalid_username_characters() {
        let mut request = request();
        request.username = "john-doe".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_email() {
        let mut request = request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_experience_out_of_range() {
        let mut request = request();
        request.experience = Some(-1);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_into_new_user_normalizes_email() {
        let new_user = request().into_new_user();
        assert_eq!(new_user.email, "john@example.com");
        assert_eq!(new_user.experience, Some(3));
    }
}
