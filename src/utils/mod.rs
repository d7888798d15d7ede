//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리 유틸리티
//! - [`time`] - BSON 시각과 `chrono` 시각 간 변환

pub mod string_utils;
pub mod time;
