//! WellBite 인증 서비스 백엔드
//!
//! WellBite 애플리케이션의 인증 토큰 서브시스템입니다.
//! 짧게 사는 서명된 액세스 토큰과 저장소에 기록되는 폐기 가능한 리프레시 토큰을 발급하고,
//! 보호된 요청마다 액세스 토큰을 검증합니다.
//!
//! # Features
//!
//! - **로그인**: Basic 인증 헤더로 자격 증명 확인 후 토큰 쌍 발급
//! - **토큰 갱신**: 유효한 리프레시 토큰으로 새 액세스 토큰 발급
//! - **로그아웃**: 리프레시 토큰 폐기 (선택적으로 액세스 토큰 denylist)
//! - **MongoDB**: 사용자와 리프레시 토큰 영구 저장
//! - **Redis**: 폐기된 액세스 토큰 `jti` 기록 (선택)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← Bearer 토큰 인증 파이프라인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← ClaimsCodec, TokenIssuer, TokenVerifier, RevocationService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← RefreshTokenStore, UserDirectory
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use wellbite_auth_service::state::AppState;
//!
//! let state = AppState::new(auth_config, store, directory, passwords, access_revocation);
//!
//! let pair = state.issuer.issue_pair(&user).await?;
//! let access_token = state.codec.sign(&pair.claims)?;
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
pub mod state;

#[cfg(test)]
pub mod test_support;
