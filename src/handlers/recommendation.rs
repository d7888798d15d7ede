//! # Recommendation Request HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/requests` | 추천 요청 생성 |
//! | `POST` | `/requests/search` | 필터로 요청 검색 |
//! | `GET` | `/requests/{id}` | 요청 조회 |
//! | `PUT` | `/requests/{id}/accept` | 요청 수락 |
//! | `PUT` | `/requests/{id}/reject` | 요청 거절 |

use actix_web::{get, post, put, web, HttpResponse};
use crate::core::errors::AppResult;
use crate::core::state::AppState;
use crate::domain::dto::common::RejectionDto;
use crate::domain::dto::recommendation::{CreateRecommendationRequest, RecommendationRequestFilterDto};

#[post("/requests")]
pub async fn create_request(
    state: web::Data<AppState>,
    payload: web::Json<CreateRecommendationRequest>,
) -> AppResult<HttpResponse> {
    let created = state
        .recommendation_request_service
        .create(payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(created))
}

#[post("/requests/search")]
pub async fn get_requests(
    state: web::Data<AppState>,
    filter: web::Json<RecommendationRequestFilterDto>,
) -> AppResult<HttpResponse> {
    let requests = state.recommendation_request_service.get_requests(&filter).await?;
    Ok(HttpResponse::Ok().json(requests))
}

#[get("/requests/{id}")]
pub async fn get_request(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let request = state.recommendation_request_service.get_request(&id).await?;
    Ok(HttpResponse::Ok().json(request))
}

#[put("/requests/{id}/accept")]
pub async fn accept_request(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let accepted = state.recommendation_request_service.accept_request(&id).await?;
    Ok(HttpResponse::Ok().json(accepted))
}

#[put("/requests/{id}/reject")]
pub async fn reject_request(
    state: web::Data<AppState>,
    id: web::Path<String>,
    rejection: web::Json<RejectionDto>,
) -> AppResult<HttpResponse> {
    let rejected = state
        .recommendation_request_service
        .reject_request(&id, rejection.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(rejected))
}
