//! # Domain Entities
//!
//! MongoDB에 저장되는 도메인 엔티티들입니다.
//!
//! - [`users`] - 외부에서 관리되는 사용자 (인증 서브시스템은 읽기만 함)
//! - [`tokens`] - 인증 서브시스템이 소유하는 리프레시 토큰 레코드

pub mod users;
pub mod tokens;

pub use users::*;
pub use tokens::*;
