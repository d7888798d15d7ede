//! 사용자 검색 필터 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 사용자 검색 조건
///
/// 모든 필드는 선택 사항이며, 값이 있는 필드에 대응하는 필터만 적용됩니다.
/// `*_pattern` 필드는 정규식이며 필드 전체가 패턴과 일치해야 합니다.
///
/// ```json
/// { "city_pattern": "Seoul|Busan", "experience_min": 2, "page": 0, "page_size": 20 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserFilterDto {
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub username_pattern: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub about_pattern: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub email_pattern: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub phone_pattern: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub city_pattern: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub country_pattern: Option<String>,
    #[validate(range(min = 0, message = "최소 경력은 0 이상이어야 합니다"))]
    pub experience_min: Option<i32>,
    #[validate(range(min = 0, message = "최대 경력은 0 이상이어야 합니다"))]
    pub experience_max: Option<i32>,
    /// 0부터 시작하는 페이지 번호
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "페이지 크기는 1-100 사이여야 합니다"))]
    pub page_size: Option<u32>,
}

impl UserFilterDto {
    pub const DEFAULT_PAGE_SIZE: u32 = 20;

    /// 건너뛸 레코드 수와 페이지 크기를 반환합니다.
    pub fn pagination(&self) -> (usize, usize) {
        let page = self.page.unwrap_or(0) as usize;
        let page_size = self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE) as usize;
        (page * page_size, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_patterns_are_absent() {
        let filter: UserFilterDto =
            serde_json::from_str(r#"{"username_pattern": "  ", "city_pattern": "Seoul"}"#).unwrap();

        assert_eq!(filter.username_pattern, None);
        assert_eq!(filter.city_pattern.as_deref(), Some("Seoul"));
    }

    #[test]
    fn test_pagination_defaults() {
        let filter = UserFilterDto::default();
        assert_eq!(filter.pagination(), (0, 20));

        let filter = UserFilterDto { page: Some(2), page_size: Some(10), ..Default::default() };
        assert_eq!(filter.pagination(), (20, 10));
    }

    #[test]
    fn test_page_size_bounds() {
        let filter = UserFilterDto { page_size: Some(0), ..Default::default() };
        assert!(filter.validate().is_err());
    }
}
