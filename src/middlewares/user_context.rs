//! `x-user-id` 헤더 → [`UserContext`] 미들웨어

use std::future::{ready, Ready};
use std::rc::Rc;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::UserContext;

pub const USER_ID_HEADER: &str = "x-user-id";

pub struct UserContextMiddleware;

impl<S, B> Transform<S, ServiceRequest> for UserContextMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = UserContextMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(UserContextMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct UserContextMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for UserContextMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match extract_user_context(&req) {
                Some(context) => {
                    log::debug!("호출자: {}", context.user_id);
                    req.extensions_mut().insert(context);
                }
                None => log::debug!("호출자 정보 없음: {}", req.path()),
            }

            service.call(req).await
        })
    }
}

/// 비어 있지 않은 `x-user-id` 헤더 값
fn extract_user_context(req: &ServiceRequest) -> Option<UserContext> {
    req.headers()
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(UserContext::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use crate::domain::models::OptionalUserContext;

    async fn whoami(context: OptionalUserContext) -> HttpResponse {
        match context.0 {
            Some(user) => HttpResponse::Ok().body(user.user_id),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    async fn required(context: UserContext) -> HttpResponse {
        HttpResponse::Ok().body(context.user_id)
    }

    #[actix_web::test]
    async fn test_header_is_exposed_to_handlers() {
        let app = test::init_service(
            App::new()
                .wrap(UserContextMiddleware)
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((USER_ID_HEADER, " 42 "))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "42");

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((USER_ID_HEADER, "   "))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized_for_required_context() {
        let app = test::init_service(
            App::new()
                .wrap(UserContextMiddleware)
                .route("/me", web::get().to(required)),
        )
        .await;

        let req = test::TestRequest::get().uri("/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
