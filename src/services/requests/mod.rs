//! 요청 생명주기 공통 구성 요소

pub mod lifecycle;

pub use lifecycle::{AcceptHook, NoopAcceptHook, RequestLifecycle};
