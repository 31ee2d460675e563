//! Token Entity Module
//!
//! 영속화되는 리프레시 토큰 레코드를 정의합니다.

pub mod refresh_token;

pub use refresh_token::*;
