//! 요청 거절 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 멘토십/추천 요청 거절 본문
///
/// 추천 요청 API의 이전 필드명 `reason`도 함께 허용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RejectionDto {
    #[serde(alias = "reason")]
    #[validate(length(
        min = 1,
        max = 4096,
        message = "거절 사유는 1-4096자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub rejection_reason: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank_rejection_reason")
            .with_message("거절 사유는 공백일 수 없습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_legacy_reason_field() {
        let dto: RejectionDto = serde_json::from_str(r#"{"reason": "busy"}"#).unwrap();
        assert_eq!(dto.rejection_reason, "busy");
    }

    #[test]
    fn test_blank_reason_is_invalid() {
        let dto = RejectionDto { rejection_reason: "   ".to_string() };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_too_long_reason_is_invalid() {
        let dto = RejectionDto { rejection_reason: "x".repeat(4097) };
        assert!(dto.validate().is_err());
    }
}
