//! # Application Error Handling System
//!
//! 사용자 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 JSON 응답으로 변환되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `InvalidParticipants` | 400 Bad Request | 요청자/수신자 조합이 잘못됨 |
//! | `AuthenticationError` | 401 Unauthorized | 호출자 정보(`x-user-id`) 누락 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 중복 데이터, 동시 수정 충돌 |
//! | `DuplicateRequestWindow` | 409 Conflict | 쿨다운 기간 내 중복 요청 |
//! | `InvalidStateTransition` | 409 Conflict | PENDING이 아닌 요청의 상태 변경 |
//! | `CyclicMentorship` | 409 Conflict | 멘토십 순환 관계 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시/메시지 버스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_request(&self, id: &str) -> AppResult<MentorshipRequest> {
//!     self.requests
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("멘토십 요청을 찾을 수 없습니다: {}", id)))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 인프라 계층(데이터베이스, Redis), 요청 검증 계층, 요청 생명주기 계층에서
/// 발생하는 모든 에러를 포괄합니다. 생명주기 관련 변형들은 호출자 입력 오류이며
/// 내부에서 재시도하지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류입니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 및 Pub/Sub 관련 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러
    ///
    /// DTO 검증 실패, 잘못된 ID 형식, 잘못된 필터 패턴 등에서 발생합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 이메일 중복, 이미 맺어진 멘토 관계, 낙관적 잠금(version) 충돌 등에서 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 호출자 식별 실패 에러
    ///
    /// 호출자 정보가 필요한 엔드포인트에 `x-user-id` 헤더가 없거나 비어 있을 때 발생합니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 요청 참여자 검증 실패
    ///
    /// 요청자와 수신자가 같거나, 둘 중 하나가 존재하지 않는 사용자일 때 발생합니다.
    #[error("Invalid participants: {0}")]
    InvalidParticipants(String),

    /// 쿨다운 기간 내 중복 요청
    ///
    /// 같은 (요청자, 수신자) 쌍의 이전 요청이 설정된 쿨다운 기간 안에 존재할 때 발생합니다.
    #[error("Duplicate request window: {0}")]
    DuplicateRequestWindow(String),

    /// 허용되지 않는 상태 전이
    ///
    /// PENDING이 아닌 요청을 수락/거절하려 할 때 발생합니다.
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    /// 멘토십 순환 관계
    ///
    /// 수신자가 이미 요청자의 멘티인 상태에서 멘토십 요청을 수락하려 할 때 발생합니다.
    #[error("Cyclic mentorship: {0}")]
    CyclicMentorship(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 종류에 대응하는 HTTP 상태 코드를 반환합니다.
    pub fn status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::InvalidParticipants(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_)
            | AppError::DuplicateRequestWindow(_)
            | AppError::InvalidStateTransition(_)
            | AppError::CyclicMentorship(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::RedisError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식을 따릅니다.
    /// 5xx 에러는 서버 로그에 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::RedisError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

impl From<actix_multipart::MultipartError> for AppError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        AppError::ValidationError(format!("multipart 요청을 읽을 수 없습니다: {}", e))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let event: BanEvent = serde_json::from_str(&payload)
///     .context("밴 이벤트 역직렬화 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("message is required".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_participants_is_bad_request() {
        let error = AppError::InvalidParticipants("same user".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_lifecycle_errors_are_conflicts() {
        let errors = [
            AppError::DuplicateRequestWindow("window".to_string()),
            AppError::InvalidStateTransition("ACCEPTED".to_string()),
            AppError::CyclicMentorship("cycle".to_string()),
            AppError::ConflictError("version".to_string()),
        ];

        for error in errors {
            assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("x-user-id missing".to_string());
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
