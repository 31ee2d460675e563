//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`auth_header`] - `Authorization` 헤더 파싱 (Bearer, Basic)
//! - [`display_terminal`] - 서버 시작 과정의 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::auth_header::extract_bearer_token;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let token = extract_bearer_token(Some("Bearer eyJ..."))?;
//! print_boxed_title("WellBite Auth Service");
//! ```

pub mod auth_header;
pub mod display_terminal;
