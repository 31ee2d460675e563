//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 토큰 발급/검증/폐기, 사용자 조회        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB / 인메모리 저장소          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<AppState>`에서 컴포넌트를 꺼내 쓰고,
//! 모든 실패를 [`AppError`](crate::errors::AppError)로 반환하여
//! 응답 변환을 `ResponseError` 구현에 맡깁니다.

pub mod auth;
