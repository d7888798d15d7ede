//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에 전달할 형태로 변환한 응답 DTO입니다.
//! 저장소 전용 타입(BSON `DateTime`)은 RFC 3339 시각으로 바뀌어 나갑니다.

pub mod user_response;

pub use user_response::UserResponse;
