//! 사용자 관련 서비스 모듈
//!
//! # Features
//!
//! - 이메일/비밀번호 자격 증명 검증
//! - ID 기반 사용자 조회
//!
//! # Security
//!
//! - bcrypt 비밀번호 비교 (테스트 환경은 평문)
//! - 알 수 없는 이메일과 틀린 비밀번호를 구분하지 않음

pub mod password_service;
pub mod user_service;

pub use password_service::*;
pub use user_service::*;
