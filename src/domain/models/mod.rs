//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB에 저장되는 문서 (`User`, `RefreshToken`)
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값 (`AccessTokenClaims`, `AuthenticatedUser`)
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/    ← 인증된 주체와 접근 정책
//! └── token/   ← 액세스 토큰 클레임과 토큰 쌍
//! ```

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
