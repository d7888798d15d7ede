//! HTTP 요청 핸들러 모듈
//!
//! 핸들러는 요청을 DTO로 바꿔 `web::Data<AppState>`의 서비스에 넘기고,
//! 결과를 JSON으로 돌려줍니다. 에러는 `AppError`가 HTTP 응답으로 변환합니다.
//!
//! - [`users`] - `/api/v1/users`
//! - [`mentorship`] - `/api/v1/mentorship`
//! - [`recommendation`] - `/api/v1/recommendation`

pub mod multipart;
pub mod users;
pub mod mentorship;
pub mod recommendation;
