//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 계약을 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **도메인 분리**: 저장용 `RefreshToken` 레코드는 클라이언트에 직접 직렬화하지 않습니다.
//! - **유효성 검증**: 요청 DTO는 `validator` crate로 검증합니다.
//! - **필드 표기**: 클라이언트 앱과의 계약에 맞춰 camelCase를 사용합니다.
//!
//! ```text
//! dto/
//! └── auth/
//!     ├── request.rs    # RefreshRequest, LogoutRequest
//!     └── response.rs   # LoginResponse, RefreshResponse, UserResponse
//! ```

pub mod auth;

pub use auth::*;
