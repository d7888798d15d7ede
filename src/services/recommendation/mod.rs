//! 추천 요청 서비스

pub mod recommendation_request_service;

pub use recommendation_request_service::RecommendationRequestService;
