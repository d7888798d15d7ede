//! # Mentorship HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/{user_id}/mentors` | 멘토 목록 |
//! | `GET` | `/{user_id}/mentees` | 멘티 목록 |
//! | `DELETE` | `/{mentee_id}/mentors/{mentor_id}` | 멘토 해제 |
//! | `DELETE` | `/{mentor_id}/mentees/{mentee_id}` | 멘티 해제 |
//! | `POST` | `/requests` | 멘토십 요청 생성 |
//! | `POST` | `/requests/search` | 필터로 요청 검색 |
//! | `PUT` | `/requests/{id}/accept` | 요청 수락 |
//! | `PUT` | `/requests/{id}/reject` | 요청 거절 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::core::errors::AppResult;
use crate::core::state::AppState;
use crate::domain::dto::common::RejectionDto;
use crate::domain::dto::mentorship::{CreateMentorshipRequest, MentorshipRequestFilterDto};

#[get("/{user_id}/mentors")]
pub async fn get_mentors(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let mentors = state.mentorship_service.get_mentors(&user_id).await?;
    Ok(HttpResponse::Ok().json(mentors))
}

#[get("/{user_id}/mentees")]
pub async fn get_mentees(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let mentees = state.mentorship_service.get_mentees(&user_id).await?;
    Ok(HttpResponse::Ok().json(mentees))
}

#[delete("/{mentee_id}/mentors/{mentor_id}")]
pub async fn delete_mentor(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (mentee_id, mentor_id) = path.into_inner();
    state.mentorship_service.delete_mentor(&mentee_id, &mentor_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[delete("/{mentor_id}/mentees/{mentee_id}")]
pub async fn delete_mentee(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (mentor_id, mentee_id) = path.into_inner();
    state.mentorship_service.delete_mentee(&mentor_id, &mentee_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/requests")]
pub async fn request_mentorship(
    state: web::Data<AppState>,
    payload: web::Json<CreateMentorshipRequest>,
) -> AppResult<HttpResponse> {
    let created = state
        .mentorship_request_service
        .request_mentorship(payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(created))
}

#[post("/requests/search")]
pub async fn get_requests(
    state: web::Data<AppState>,
    filter: web::Json<MentorshipRequestFilterDto>,
) -> AppResult<HttpResponse> {
    let requests = state.mentorship_request_service.get_requests(&filter).await?;
    Ok(HttpResponse::Ok().json(requests))
}

#[put("/requests/{id}/accept")]
pub async fn accept_request(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let accepted = state.mentorship_request_service.accept_request(&id).await?;
    Ok(HttpResponse::Ok().json(accepted))
}

#[put("/requests/{id}/reject")]
pub async fn reject_request(
    state: web::Data<AppState>,
    id: web::Path<String>,
    rejection: web::Json<RejectionDto>,
) -> AppResult<HttpResponse> {
    let rejected = state
        .mentorship_request_service
        .reject_request(&id, rejection.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(rejected))
}
