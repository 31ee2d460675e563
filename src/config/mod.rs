//! # Configuration Module
//!
//! 인증 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, Redis, Rate Limiting 설정
//! - [`auth_config`] - JWT 서명 키, 발급자/대상, 토큰 유효 기간
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서 서명 키 누락 시 시작 단계에서 실패
//! - 토큰 설정은 불변 값으로 만들어 컴포넌트 생성자에 전달
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AuthConfig, Environment, ServerConfig};
//!
//! let environment = Environment::current();
//! let auth_config = AuthConfig::from_env(&environment)?;
//! println!("Server will bind to {}", ServerConfig::bind_address());
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
