//! # Domain Layer Module
//!
//! 인증 서브시스템의 도메인 타입을 모아둔 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB에 저장되는 문서 (User, RefreshToken)
//! ├── models    - 요청 처리 중에만 존재하는 값 (클레임, 인증된 주체, 접근 정책)
//! └── dto       - API 요청/응답 계약
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! 도메인 계층은 HTTP나 저장소 구현에 의존하지 않습니다.
//! 단, `AuthenticatedUser`는 핸들러 추출자로 쓰이도록 `FromRequest`를 구현합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{RefreshToken, Role, User};
pub use models::{AccessPolicy, AccessTokenClaims, AuthenticatedUser, TokenPair};
