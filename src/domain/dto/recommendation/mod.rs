//! # Recommendation DTOs
//!
//! 추천 요청 생성/검색/응답 DTO입니다.

pub mod recommendation_request_dto;
pub mod recommendation_request_filter;

pub use recommendation_request_dto::{CreateRecommendationRequest, RecommendationRequestResponse};
pub use recommendation_request_filter::RecommendationRequestFilterDto;
