//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserDirectory`](user_repo::UserDirectory) trait과 MongoDB/메모리 구현을 제공합니다.

pub mod user_repo;

pub use user_repo::*;
