//! # Core Module
//!
//! 애플리케이션 전역에서 쓰이는 기반 타입들입니다.
//!
//! - [`errors`] - `AppError` 통합 에러와 HTTP 응답 매핑
//! - [`state`] - 서비스 그래프를 한 번 조립해 핸들러에 공유하는 `AppState`
//!
//! 서비스는 전역 싱글톤이 아니라 생성자 주입으로 연결됩니다.
//!
//! ```rust,ignore
//! let state = AppState::in_memory(&AppConfig::for_tests());
//! App::new().app_data(web::Data::new(state))
//! ```

pub mod errors;
pub mod state;
