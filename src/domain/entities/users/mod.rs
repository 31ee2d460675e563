//! Users Entity Module
//!
//! 토큰 클레임에 값으로 복사되는 사용자 엔티티와 역할 열거형을 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{Role, User};
//!
//! let user = User::new(email, password_hash, first_name, last_name, Role::Client);
//! assert!(user.role.is_provisioned());
//! ```

pub mod user;

pub use user::*;
