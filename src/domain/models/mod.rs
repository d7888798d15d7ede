//! # Domain Models Module
//!
//! 저장되지 않고 요청 처리 중에만 쓰이는 모델입니다.
//!
//! ```text
//! models/
//! └── user_context.rs   ← 호출자 컨텍스트 (x-user-id 헤더)
//! ```

pub mod user_context;

pub use user_context::{OptionalUserContext, UserContext};
