//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 엔티티와 DTO, 도메인 이벤트, 요청 컨텍스트 모델을 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장소에 보관되는 핵심 객체 (User, MentorshipRequest, RecommendationRequest)
//! ├── DTOs      - HTTP 요청/응답 계약 및 필터 조건
//! ├── Events    - 메시지 버스로 발행되는 도메인 이벤트
//! └── Models    - 요청 처리 중 사용되는 모델 (호출자 컨텍스트)
//!      │
//!      ▼
//! Application Layer (Filters, Validators, Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, MongoDB, Redis)
//! ```

pub mod entities;
pub mod dto;
pub mod events;
pub mod models;
