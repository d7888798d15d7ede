//! 추천 요청 내용 검사

use std::collections::HashSet;
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::validate_required_string;

/// 메시지가 공백이 아닌지 검사하고 앞뒤 공백을 제거한 메시지를 반환합니다.
pub fn validate_message(message: &str) -> AppResult<String> {
    validate_required_string(message, "추천 요청 메시지")
}

/// 요청 스킬 목록이 비어 있지 않고 중복이 없는지 검사합니다.
pub fn validate_requested_skills(skill_ids: &[String]) -> AppResult<()> {
    if skill_ids.is_empty() {
        return Err(AppError::ValidationError(
            "추천 받을 스킬을 하나 이상 지정해야 합니다".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = skill_ids.iter().find(|id| !seen.insert(id.as_str())) {
        return Err(AppError::ValidationError(format!(
            "중복된 스킬이 있습니다: {}",
            duplicate
        )));
    }

    Ok(())
}
