//! 인증 관련 모델

pub mod access_policy;
pub mod authenticated_user;

pub use access_policy::*;
pub use authenticated_user::*;
