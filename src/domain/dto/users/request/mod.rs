//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 DTO들입니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 이메일, 길이, 범위 등 기본 형식 규칙 (`validator`)
//! 3. **비즈니스 검증**: 이메일/사용자명 중복 등 (서비스 계층)
//!
//! 필터 DTO의 문자열 필드는 빈 문자열이나 공백을 `None`으로 정규화하므로
//! 공백 패턴은 "필터 없음"과 같습니다.

pub mod create_user;
pub mod user_filter;
pub mod profile_pic;

pub use create_user::CreateUserRequest;
pub use user_filter::UserFilterDto;
pub use profile_pic::UserProfilePicDto;
