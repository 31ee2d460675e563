//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 액세스 토큰 폐기 확인, 사용자 조회, 접근 정책 적용
//! - 인증된 사용자 정보를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::scope("/api/auth")
//!     .route("/login", web::post().to(login))
//!     .service(
//!         web::resource("/refresh")
//!             .wrap(AuthMiddleware::provisioned())
//!             .route(web::post().to(refresh)),
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
