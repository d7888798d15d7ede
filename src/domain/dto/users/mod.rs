//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                    # 클라이언트 → 서버 요청 DTO
//! │   ├── create_user.rs          # 사용자 생성 요청 (multipart의 userJson 파트)
//! │   ├── user_filter.rs          # 사용자 검색 필터 + 페이지네이션
//! │   └── profile_pic.rs          # 아바타 파일 키
//! └── response/                   # 서버 → 클라이언트 응답 DTO
//!     └── user_response.rs        # 사용자 정보 응답
//! ```
//!
//! 요청 DTO는 `validator` 크레이트로 형식을 검증하고, 중복 여부 같은
//! 저장소 의존 규칙은 서비스 계층에서 검증합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
