//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 요청 DTO는 `validator`로 형식을 검증하고, 필터 DTO는 선택 필드들의 묶음으로
//! 어떤 필터를 적용할지를 결정합니다. 응답 DTO는 엔티티에서 `From`으로 변환됩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common/            # 공통 DTO (거절 사유)
//! ├── users/             # 사용자 생성/필터/아바타 키, 사용자 응답
//! ├── mentorship/        # 멘토십 요청 생성/필터/응답
//! └── recommendation/    # 추천 요청 생성/필터/응답
//! ```

pub mod common;
pub mod users;
pub mod mentorship;
pub mod recommendation;

pub use common::*;
pub use users::*;
pub use mentorship::*;
pub use recommendation::*;
