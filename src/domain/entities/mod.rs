//! # Entities Module
//!
//! 저장소에 영속화되는 도메인 엔티티들입니다.
//! 모든 엔티티는 MongoDB `ObjectId`의 16진수 문자열을 `_id`로 사용합니다.

pub mod users;
pub mod requests;

pub use users::*;
pub use requests::*;
