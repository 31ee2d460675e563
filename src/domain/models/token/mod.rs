//! 토큰 모델 모듈

#[allow(clippy::module_inception)]
pub mod token;

pub use token::*;
