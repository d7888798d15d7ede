//! # User HTTP Handlers
//!
//! `/api/v1/users` 아래의 사용자 프로필 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `` | 사용자 생성 (multipart) | 201 Created |
//! | `GET` | `/{id}` | 사용자 조회 (프로필 조회 이벤트) | 200 OK |
//! | `POST` | `/byIds` | ID 목록으로 조회 | 200 OK |
//! | `POST` | `/filter` | 필터 검색 + 페이지 | 200 OK |
//! | `PUT` | `/{id}/avatar` | 아바타 변경 (multipart, 파일 없으면 랜덤) | 200 OK |
//! | `PUT` | `/{id}/avatar/keys` | 업로드된 아바타 키 저장 | 200 OK |
//! | `GET` | `/{id}/avatar` | 아바타 키 조회 | 200 OK |
//! | `DELETE` | `/{id}/avatar` | 아바타 삭제 | 204 No Content |
//! | `PUT` | `/deactivate/{id}` | 계정 비활성화 | 200 OK |
//! | `GET` | `/{id}/exists` | 존재 여부 | 200 OK |
//! | `GET` | `/{id}/followers` | 팔로워 목록 | 200 OK |
//! | `POST` | `/followers/exist` | ID 목록 전체 존재 여부 | 200 OK |

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::core::errors::{AppError, AppResult};
use crate::core::state::AppState;
use crate::domain::dto::users::{CreateUserRequest, UserFilterDto, UserProfilePicDto};
use crate::domain::models::OptionalUserContext;
use crate::handlers::multipart::{read_user_form, USER_JSON_PART};

/// 사용자 생성
///
/// `userJson` part에 [`CreateUserRequest`] JSON을, 선택적으로 `file` part에 아바타를 담습니다.
#[post("")]
pub async fn create_user(
    state: web::Data<AppState>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let form = read_user_form(payload, state.user_service.max_avatar_bytes()).await?;

    let user_json = form.user_json.ok_or_else(|| {
        AppError::ValidationError(format!("'{}' part가 필요합니다", USER_JSON_PART))
    })?;
    let request: CreateUserRequest = serde_json::from_slice(&user_json)
        .map_err(|e| AppError::ValidationError(format!("사용자 정보 JSON이 올바르지 않습니다: {}", e)))?;

    let user = state.user_service.create_user(request, form.file).await?;

    Ok(HttpResponse::Created().json(user))
}

/// 사용자 조회
///
/// `x-user-id` 헤더의 호출자가 다른 사용자면 프로필 조회 이벤트가 발행됩니다.
#[get("/{user_id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    viewer: OptionalUserContext,
) -> AppResult<HttpResponse> {
    let user = state.user_service.get_user(&user_id, viewer.0.as_ref()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[post("/byIds")]
pub async fn get_users_by_ids(
    state: web::Data<AppState>,
    ids: web::Json<Vec<String>>,
) -> AppResult<HttpResponse> {
    let users = state.user_service.get_users_by_ids(&ids).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[post("/filter")]
pub async fn get_users_by_filter(
    state: web::Data<AppState>,
    filter: web::Json<UserFilterDto>,
) -> AppResult<HttpResponse> {
    let users = state.user_service.get_users_by_filter(&filter).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[put("/{user_id}/avatar")]
pub async fn update_user_avatar(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let form = read_user_form(payload, state.user_service.max_avatar_bytes()).await?;
    let keys = state.user_service.update_user_avatar(&user_id, form.file).await?;

    Ok(HttpResponse::Ok().json(keys))
}

#[put("/{user_id}/avatar/keys")]
pub async fn upload_avatar_keys(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    keys: web::Json<UserProfilePicDto>,
) -> AppResult<HttpResponse> {
    let keys = state.user_service.upload_avatar_keys(&user_id, keys.into_inner()).await?;
    Ok(HttpResponse::Ok().json(keys))
}

/// 아바타 키 조회. 아바타가 없으면 빈 문자열 키를 반환합니다.
#[get("/{user_id}/avatar")]
pub async fn get_avatar_keys(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let keys = state.user_service.get_avatar_keys(&user_id).await?;
    Ok(HttpResponse::Ok().json(keys))
}

#[delete("/{user_id}/avatar")]
pub async fn delete_avatar(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.user_service.delete_avatar(&user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[put("/deactivate/{user_id}")]
pub async fn deactivate_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user = state.user_service.deactivate_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/{user_id}/exists")]
pub async fn check_user_existence(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let exists = state.user_service.check_user_existence(&user_id).await?;
    Ok(HttpResponse::Ok().json(exists))
}

#[get("/{user_id}/followers")]
pub async fn get_user_followers(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let followers = state.user_service.get_user_followers(&user_id).await?;
    Ok(HttpResponse::Ok().json(followers))
}

#[post("/followers/exist")]
pub async fn check_all_followers_exist(
    state: web::Data<AppState>,
    ids: web::Json<Vec<String>>,
) -> AppResult<HttpResponse> {
    let exist = state.user_service.check_all_users_exist(&ids).await?;
    Ok(HttpResponse::Ok().json(exist))
}
