//! 호출자 컨텍스트
//!
//! 인증은 앞단의 게이트웨이가 담당하며, 이 서비스는 게이트웨이가 붙여 준
//! `x-user-id` 헤더로 호출자를 식별합니다. 헤더 값은 [`UserContextMiddleware`]가
//! 요청 extensions에 넣고, 핸들러는 아래 추출자로 꺼내 씁니다.
//!
//! [`UserContextMiddleware`]: crate::middlewares::UserContextMiddleware

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// 호출자 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: String,
}

impl UserContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into() }
    }

    pub fn is(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 호출자 정보가 없으면 401을 반환합니다.
impl FromRequest for UserContext {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<UserContext>() {
            Some(context) => ready(Ok(context.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "x-user-id 헤더가 필요합니다".to_string(),
            )
            .into())),
        }
    }
}

/// 선택적 호출자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUserContext(pub Option<UserContext>);

impl FromRequest for OptionalUserContext {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let context = req.extensions().get::<UserContext>().cloned();
        ready(Ok(OptionalUserContext(context)))
    }
}
