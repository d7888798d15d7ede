//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별 스코프로 묶습니다.
//!
//! | 스코프 | 핸들러 모듈 |
//! |--------|-------------|
//! | `/health` | 헬스체크 |
//! | `/api/v1/users` | [`handlers::users`] |
//! | `/api/v1/mentorship` | [`handlers::mentorship`] |
//! | `/api/v1/recommendation` | [`handlers::recommendation`] |
//!
//! 호출자 식별(`x-user-id`)은 라우트가 아니라 앱 전역의
//! [`UserContextMiddleware`](crate::middlewares::UserContextMiddleware)가 담당합니다.

use actix_web::web;
use serde_json::json;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_mentorship_routes(cfg);
    configure_recommendation_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_users_by_ids)
            .service(handlers::users::get_users_by_filter)
            .service(handlers::users::check_all_followers_exist)
            .service(handlers::users::deactivate_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user_avatar)
            .service(handlers::users::upload_avatar_keys)
            .service(handlers::users::get_avatar_keys)
            .service(handlers::users::delete_avatar)
            .service(handlers::users::check_user_existence)
            .service(handlers::users::get_user_followers)
    );
}

fn configure_mentorship_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/mentorship")
            .service(handlers::mentorship::request_mentorship)
            .service(handlers::mentorship::get_requests)
            .service(handlers::mentorship::accept_request)
            .service(handlers::mentorship::reject_request)
            .service(handlers::mentorship::get_mentors)
            .service(handlers::mentorship::get_mentees)
            .service(handlers::mentorship::delete_mentor)
            .service(handlers::mentorship::delete_mentee)
    );
}

fn configure_recommendation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/recommendation")
            .service(handlers::recommendation::create_request)
            .service(handlers::recommendation::get_requests)
            .service(handlers::recommendation::get_request)
            .service(handlers::recommendation::accept_request)
            .service(handlers::recommendation::reject_request)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
