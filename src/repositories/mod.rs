//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `async_trait` 포트로 정의되고, 서비스는 `Arc<dyn ...>`로 주입받습니다.
//!
//! | 포트 | MongoDB 구현 | 메모리 구현 |
//! |------|--------------|-------------|
//! | [`UserRepository`] | [`MongoUserRepository`] (Redis 조회 캐시) | [`InMemoryUserRepository`] |
//! | [`RequestRepository<R>`] | [`MongoRequestRepository<R>`] | [`InMemoryRequestRepository<R>`] |
//!
//! 메모리 구현은 `STORAGE_BACKEND=memory` 실행과 테스트에서 사용됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = users.find_by_id("507f1f77bcf86cd799439011").await?;
//! ```

pub mod users;
pub mod requests;

pub use users::*;
pub use requests::*;

use crate::core::errors::AppError;

/// 메모리 저장소의 잠금이 오염되었을 때의 에러
pub(crate) fn poisoned<T>(_: T) -> AppError {
    AppError::InternalError("메모리 저장소 잠금이 오염되었습니다".to_string())
}
