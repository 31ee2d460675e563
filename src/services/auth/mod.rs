//! 인증 및 토큰 서비스 모듈
//!
//! 토큰 서브시스템의 핵심 컴포넌트들을 제공합니다.
//!
//! # Components
//!
//! - [`ClaimsCodec`] - 액세스 토큰 서명/검증 (HMAC-SHA256)
//! - [`TokenIssuer`] - 액세스 토큰 클레임 + 리프레시 토큰 발급
//! - [`TokenVerifier`] - 리프레시/액세스 토큰 검증
//! - [`RevocationService`] - 리프레시 토큰 폐기
//! - [`AuthenticationPipeline`] - 보호된 요청의 인증 단계
//! - [`AccessTokenRevocation`] - 액세스 토큰 폐기 확인 확장 지점
//!
//! # Security
//!
//! - 서명 키, 발급자, 대상, 유효 기간은 시작 시 만든 불변 [`AuthConfig`](crate::config::AuthConfig)에서만 읽음
//! - 리프레시 토큰은 32바이트 난수, 저장소가 유일성 보장
//! - 인증 실패의 구체적인 원인은 로그에만 기록
//!
//! # Examples
//!
//! ```rust,ignore
//! let codec = ClaimsCodec::new(&auth_config);
//! let issuer = TokenIssuer::new(auth_config.clone(), store.clone());
//!
//! let pair = issuer.issue_pair(&user).await?;
//! let access_token = codec.sign(&pair.claims)?;
//! ```

pub mod access_revocation;
pub mod claims_codec;
pub mod pipeline;
pub mod revocation_service;
pub mod token_issuer;
pub mod token_verifier;

pub use access_revocation::*;
pub use claims_codec::*;
pub use pipeline::*;
pub use revocation_service::*;
pub use token_issuer::*;
pub use token_verifier::*;
