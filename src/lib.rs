//! 사용자 서비스 백엔드
//!
//! 사용자 프로필, 멘토십 관계, 멘토십/추천 요청을 관리하는 Rust 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 프로필 생성/조회, 필터 검색, 비활성화, 아바타 키
//! - **요청 생명주기**: PENDING → ACCEPTED / REJECTED 상태 머신과 쿨다운 검사
//! - **필터 체인**: 조건이 주어진 필터만 골라 AND로 합성
//! - **이벤트**: Redis Pub/Sub으로 도메인 이벤트 발행, `user_ban` 채널 구독
//! - **저장소**: MongoDB (+ Redis 조회 캐시) 또는 프로세스 메모리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← multipart/JSON → DTO
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────────┐
//! │    Services     │ ──▶ │ Validators / Filters │
//! └─────────────────┘     └──────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB / 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_service_backend::config::AppConfig;
//! use user_service_backend::core::state::AppState;
//!
//! let state = AppState::in_memory(&AppConfig::for_tests());
//! let user = state.user_service.get_user(&id, None).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod filters;
pub mod validators;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
