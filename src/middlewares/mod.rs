//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 담당합니다.
//!
//! ### 호출자 컨텍스트 미들웨어 (UserContextMiddleware)
//! - 게이트웨이가 붙인 `x-user-id` 헤더를 읽어 [`UserContext`]를 extensions에 저장
//! - 헤더가 없어도 요청은 그대로 진행되며, 호출자가 필요한 핸들러가
//!   `UserContext` 추출자로 401을 반환합니다
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(UserContextMiddleware)
//!     .configure(configure_all_routes)
//! ```
//!
//! [`UserContext`]: crate::domain::models::UserContext

pub mod user_context;

pub use user_context::{UserContextMiddleware, USER_ID_HEADER};
