//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 생성자로 의존성과 불변 설정을 명시적으로 받습니다.
//! 전역 싱글톤이나 서비스 로케이터는 사용하지 않으며, `main`에서 한 번 조립한 뒤
//! [`AppState`](crate::state::AppState)로 핸들러에 전달합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::RevocationService, users::UserService};
//!
//! let users = Arc::new(UserService::new(directory, password_verifier_for(&environment)));
//! let revocation = Arc::new(RevocationService::new(store.clone()));
//! ```

pub mod users;
pub mod auth;
