//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 [`AuthenticationPipeline`](crate::services::auth::AuthenticationPipeline)을
//! 실행하고, 성공하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 extensions에 저장합니다. 실패하면 핸들러에 도달하기 전에 401로 응답합니다.
//!
//! 파이프라인은 `web::Data<AppState>`에서 꺼내 쓰므로 앱에 상태가 등록되어 있어야 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::AccessPolicy;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    policy: AccessPolicy,
}

impl AuthMiddleware {
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }

    /// 유효한 토큰만 요구
    pub fn authenticated() -> Self {
        Self::new(AccessPolicy::Authenticated)
    }

    /// 유효한 토큰 + 역할이 배정된 사용자 요구
    pub fn provisioned() -> Self {
        Self::new(AccessPolicy::Provisioned)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            policy: self.policy,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    use crate::domain::entities::users::Role;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::test_support::TestContext;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.role.to_string())
    }

    #[actix_web::test]
    async fn test_protected_route_requires_token() {
        let ctx = TestContext::new();
        let app = test::init_service(
            App::new()
                .app_data(ctx.data())
                .service(web::resource("/me").wrap(AuthMiddleware::provisioned()).to(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "error": "unauthorized" }));
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let ctx = TestContext::new();
        let user = ctx.add_user("ana@example.com", "pw", Role::Admin);
        let app = test::init_service(
            App::new()
                .app_data(ctx.data())
                .service(web::resource("/me").wrap(AuthMiddleware::provisioned()).to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", ctx.bearer_for(&user)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "admin");
    }

    #[actix_web::test]
    async fn test_unprovisioned_user_is_rejected_only_by_provisioned_policy() {
        let ctx = TestContext::new();
        let user = ctx.add_user("new@example.com", "pw", Role::Unassigned);
        let app = test::init_service(
            App::new()
                .app_data(ctx.data())
                .service(web::resource("/strict").wrap(AuthMiddleware::provisioned()).to(whoami))
                .service(web::resource("/lenient").wrap(AuthMiddleware::authenticated()).to(whoami)),
        )
        .await;

        let strict = test::TestRequest::get()
            .uri("/strict")
            .insert_header(("Authorization", ctx.bearer_for(&user)))
            .to_request();
        assert_eq!(test::call_service(&app, strict).await.status(), 401);

        let lenient = test::TestRequest::get()
            .uri("/lenient")
            .insert_header(("Authorization", ctx.bearer_for(&user)))
            .to_request();
        assert_eq!(test::call_service(&app, lenient).await.status(), 200);
    }
}
